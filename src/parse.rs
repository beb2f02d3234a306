//! Line parsers for the supported dataset formats.

use crate::error::ParseError;
use crate::models::{Format, Zip};

/// Parse one dataset line in the given format.
///
/// A trailing `\n` or `\r\n` is ignored.
pub fn parse_record(line: &str, format: Format) -> Result<Zip, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    match format {
        Format::QuotedCsv => parse_csv(line),
        Format::Gazetteer => parse_tsv(line),
    }
}

/// Parse a line of the form
/// `"code","latitude","longitude","city","state","county","type"`.
///
/// Every double quote is stripped. Empty coordinates are left at zero.
pub fn parse_csv(line: &str) -> Result<Zip, ParseError> {
    let fields = split_fields(line, Format::QuotedCsv)?;
    let mut fields = fields.into_iter().map(|f| f.replace('"', ""));
    // split_fields guarantees exactly seven fields
    let mut next = || fields.next().unwrap_or_default();

    let code = parse_code(&next())?;
    let latitude = parse_optional_coord("latitude", &next())?;
    let longitude = parse_optional_coord("longitude", &next())?;

    let mut zip = Zip::new(code, latitude, longitude);
    zip.city = next();
    zip.state = next();
    zip.county = next();
    zip.zip_type = next();

    Ok(zip)
}

/// Parse a tab-separated gazetteer line (geonames.org postal code dump).
///
/// Columns: country, code, place, state name, state code, county name,
/// county code, community name, community code, latitude, longitude, accuracy.
pub fn parse_tsv(line: &str) -> Result<Zip, ParseError> {
    let fields = split_fields(line, Format::Gazetteer)?;

    let code = parse_code(fields[1])?;
    let latitude = parse_coord("latitude", fields[9])?;
    let longitude = parse_coord("longitude", fields[10])?;

    let mut zip = Zip::new(code, latitude, longitude);
    zip.city = fields[2].to_string();
    zip.state = fields[4].to_string();
    zip.county = fields[5].to_string();

    Ok(zip)
}

fn split_fields(line: &str, format: Format) -> Result<Vec<&str>, ParseError> {
    let fields: Vec<&str> = line.split(format.delimiter()).collect();
    if fields.len() != format.field_count() {
        return Err(ParseError::WrongFieldCount {
            format,
            expected: format.field_count(),
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_code(value: &str) -> Result<String, ParseError> {
    if value.is_empty() {
        return Err(ParseError::MalformedField {
            field: "code",
            value: value.to_string(),
            reason: "postal code is empty".to_string(),
        });
    }
    Ok(value.to_string())
}

fn parse_coord(field: &'static str, value: &str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .map_err(|e| ParseError::MalformedField {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_optional_coord(field: &'static str, value: &str) -> Result<f64, ParseError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    parse_coord(field, value)
}
