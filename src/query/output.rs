//! Result rendering for the query binary.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use zipgeo::{Neighbor, Zip};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Flat CSV row; the csv crate cannot serialize flattened structs.
#[derive(Serialize)]
struct ZipRow<'a> {
    code: &'a str,
    latitude: f64,
    longitude: f64,
    city: &'a str,
    state: &'a str,
    county: &'a str,
    #[serde(rename = "type")]
    zip_type: &'a str,
    distance: Option<f64>,
}

impl<'a> ZipRow<'a> {
    fn new(zip: &'a Zip, distance: Option<f64>) -> Self {
        Self {
            code: &zip.code,
            latitude: zip.latitude(),
            longitude: zip.longitude(),
            city: &zip.city,
            state: &zip.state,
            county: &zip.county,
            zip_type: &zip.zip_type,
            distance,
        }
    }
}

pub fn write_zip<W: Write>(out: W, zip: &Zip, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, zip),
        OutputFormat::Csv => write_csv(out, [ZipRow::new(zip, None)]),
    }
}

pub fn write_neighbors<W: Write>(
    out: W,
    neighbors: &[Neighbor<'_>],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, neighbors),
        OutputFormat::Csv => write_csv(
            out,
            neighbors
                .iter()
                .map(|n| ZipRow::new(n.zip, Some(n.distance))),
        ),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<'a, W: Write>(out: W, rows: impl IntoIterator<Item = ZipRow<'a>>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holtsville() -> Zip {
        let mut zip = Zip::new("00501", 40.922326, -72.637078);
        zip.city = "HOLTSVILLE".to_string();
        zip.state = "NY".to_string();
        zip.county = "SUFFOLK".to_string();
        zip.zip_type = "UNIQUE".to_string();
        zip
    }

    #[test]
    fn test_zip_as_csv() {
        let mut buf = Vec::new();
        write_zip(&mut buf, &holtsville(), OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("code,latitude,longitude,city,state,county,type,distance")
        );
        assert_eq!(
            lines.next(),
            Some("00501,40.922326,-72.637078,HOLTSVILLE,NY,SUFFOLK,UNIQUE,")
        );
    }

    #[test]
    fn test_neighbors_as_json() {
        let zip = holtsville();
        let neighbors = [Neighbor {
            zip: &zip,
            distance: 0.0,
        }];
        let mut buf = Vec::new();
        write_neighbors(&mut buf, &neighbors, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["code"], "00501");
        assert_eq!(value[0]["county"], "SUFFOLK");
        assert_eq!(value[0]["distance"], 0.0);
    }

    #[test]
    fn test_empty_neighbors_as_csv() {
        let mut buf = Vec::new();
        write_neighbors(&mut buf, &[], OutputFormat::Csv).unwrap();
        assert!(buf.is_empty());
    }
}
