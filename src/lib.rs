//! zipgeo - postal code lookup and radius search
//!
//! This library loads postal code datasets (quoted CSV or tab-separated
//! gazetteer dumps) and answers exact-code lookups and "everything within
//! N miles" queries using great-circle distance.

pub mod dataset;
pub mod distance;
pub mod error;
pub mod loader;
pub mod models;
pub mod parse;
pub mod search;

pub use dataset::Dataset;
pub use distance::{distance, zip_distance};
pub use error::{LoadError, ParseError};
pub use loader::{load_csv_file, load_dataset, load_reader, load_tsv_file};
pub use models::{Format, Zip};
pub use parse::parse_record;
pub use search::{find, find_in_radius, Neighbor};
