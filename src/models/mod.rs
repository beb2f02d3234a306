//! Core data models for postal code datasets.

pub mod format;
pub mod zip;

pub use format::Format;
pub use zip::Zip;
