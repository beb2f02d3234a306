//! Dataset loading from flat files.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::{Format, Zip};
use crate::parse::parse_record;

/// Load every record from a dataset file.
///
/// Files ending in `.gz` are decompressed on the fly. The first malformed
/// line aborts the whole load.
pub fn load_dataset<P: AsRef<Path>>(path: P, format: Format) -> Result<Vec<Zip>, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        debug!(path = %path.display(), "Loading gzip compressed dataset");
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let zips = load_reader(BufReader::new(reader), format)?;
    info!(count = zips.len(), path = %path.display(), %format, "Loaded postal code dataset");
    Ok(zips)
}

/// Load every record from a buffered reader, one record per line.
///
/// Bytes that are not valid UTF-8 (Latin-1 place names, for instance) are
/// replaced with U+FFFD rather than failing the load.
pub fn load_reader<R: BufRead>(mut reader: R, format: Format) -> Result<Vec<Zip>, LoadError> {
    let mut zips = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let zip = parse_record(&line, format).map_err(|source| LoadError::Parse {
            line: line_no,
            source,
        })?;
        zips.push(zip);
    }

    Ok(zips)
}

/// Load a quoted CSV dataset.
pub fn load_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Zip>, LoadError> {
    load_dataset(path, Format::QuotedCsv)
}

/// Load a tab-separated gazetteer dataset.
pub fn load_tsv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Zip>, LoadError> {
    load_dataset(path, Format::Gazetteer)
}
