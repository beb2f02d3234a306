//! Owned, loaded postal code dataset.

use std::path::Path;

use crate::error::LoadError;
use crate::loader::load_dataset;
use crate::models::{Format, Zip};
use crate::search::{self, Neighbor};

/// An ordered sequence of records loaded from one file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    zips: Vec<Zip>,
}

impl Dataset {
    /// Load a dataset file in the given format.
    pub fn load<P: AsRef<Path>>(path: P, format: Format) -> Result<Self, LoadError> {
        Ok(Self {
            zips: load_dataset(path, format)?,
        })
    }

    /// Get a record by its exact code.
    pub fn find(&self, code: &str) -> Option<&Zip> {
        search::find(code, &self.zips)
    }

    /// Get every record within `radius` miles of `code`, in dataset order.
    pub fn find_in_radius(&self, code: &str, radius: f64) -> Vec<Neighbor<'_>> {
        search::find_in_radius(code, radius, &self.zips)
    }

    pub fn len(&self) -> usize {
        self.zips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zip> {
        self.zips.iter()
    }
}
