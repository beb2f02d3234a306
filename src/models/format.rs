use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// On-disk layout of a postal code dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// `"code","lat","lon","city","state","county","type"`, quotes optional
    #[serde(alias = "csv")]
    QuotedCsv,
    /// Tab-separated gazetteer dump (geonames.org postal code layout)
    #[serde(alias = "tsv")]
    Gazetteer,
}

impl Format {
    /// Number of fields a line of this format must split into.
    pub fn field_count(self) -> usize {
        match self {
            Format::QuotedCsv => 7,
            Format::Gazetteer => 12,
        }
    }

    /// Field separator for this format.
    pub fn delimiter(self) -> char {
        match self {
            Format::QuotedCsv => ',',
            Format::Gazetteer => '\t',
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::QuotedCsv => write!(f, "quoted-csv"),
            Format::Gazetteer => write!(f, "gazetteer"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" | "quoted-csv" => Ok(Format::QuotedCsv),
            "tsv" | "gazetteer" => Ok(Format::Gazetteer),
            other => Err(format!(
                "unknown dataset format '{}' (expected csv or tsv)",
                other
            )),
        }
    }
}
