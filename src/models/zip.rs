//! Postal code record.

use serde::Serialize;

use crate::distance::LatitudeTrig;

/// A single postal code entry with its coordinates and admin metadata.
///
/// Latitude and longitude are private so the cached sine/cosine of the
/// latitude can never drift from the latitude itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zip {
    /// Postal code, kept verbatim ("00501" stays "00501")
    pub code: String,

    latitude: f64,

    longitude: f64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub county: String,

    /// Code classification from the source data (e.g. "STANDARD", "UNIQUE")
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub zip_type: String,

    #[serde(skip)]
    trig: LatitudeTrig,
}

impl Zip {
    /// Create a record with no metadata.
    pub fn new(code: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            code: code.into(),
            latitude,
            longitude,
            city: String::new(),
            state: String::new(),
            county: String::new(),
            zip_type: String::new(),
            trig: LatitudeTrig::from_degrees(latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Set the latitude, recomputing the cached trig values.
    pub fn set_latitude(&mut self, latitude: f64) {
        self.latitude = latitude;
        self.trig = LatitudeTrig::from_degrees(latitude);
    }

    /// Sine of the latitude in radians.
    pub fn latitude_sin(&self) -> f64 {
        self.trig.sin
    }

    /// Cosine of the latitude in radians.
    pub fn latitude_cos(&self) -> f64 {
        self.trig.cos
    }

    pub(crate) fn trig(&self) -> LatitudeTrig {
        self.trig
    }
}
