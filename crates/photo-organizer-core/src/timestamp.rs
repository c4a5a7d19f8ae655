//! Capture timestamp resolution.
//!
//! Images prefer the EXIF `DateTimeOriginal` tag; anything that goes wrong
//! on that path degrades silently to the file's modification time. Videos
//! never attempt embedded metadata because no tag is reliable across
//! container formats, so they always use the modification time.

use chrono::{DateTime, NaiveDateTime, Utc};
use exif::{In, Tag, Value};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::error::Result;
use crate::types::MediaKind;

/// EXIF timestamp format: "YYYY:MM:DD HH:MM:SS"
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Why an embedded capture timestamp could not be used
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("cannot open file: {0}")]
    Io(#[from] std::io::Error),

    #[error("no EXIF metadata: {0}")]
    Exif(#[from] exif::Error),

    #[error("DateTimeOriginal tag is missing")]
    MissingTag,

    #[error("DateTimeOriginal value is not an ASCII string")]
    NotAscii,

    #[error("cannot parse '{value}': {source}")]
    Parse {
        value: String,
        source: chrono::ParseError,
    },
}

/// Resolve the capture timestamp for a file.
///
/// Metadata failures never surface; they are logged at debug level and the
/// modification-time fallback is used instead. A failure to stat the file
/// itself is a real error and propagates.
pub fn resolve_timestamp(kind: MediaKind, path: &Path) -> Result<NaiveDateTime> {
    if kind == MediaKind::Image {
        match exif_taken_at(path) {
            Ok(taken_at) => return Ok(taken_at),
            Err(e) => {
                debug!(
                    "No usable capture time in {}, falling back to modified time: {e}",
                    path.display()
                );
            }
        }
    }

    modified_at(path)
}

/// Read the EXIF `DateTimeOriginal` tag from the primary image
fn exif_taken_at(path: &Path) -> std::result::Result<NaiveDateTime, MetadataError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader)?;

    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .ok_or(MetadataError::MissingTag)?;

    let raw = match &field.value {
        Value::Ascii(values) => values
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string())
            .ok_or(MetadataError::NotAscii)?,
        _ => return Err(MetadataError::NotAscii),
    };

    parse_exif_datetime(&raw)
}

/// Parse an EXIF datetime string ("YYYY:MM:DD HH:MM:SS")
fn parse_exif_datetime(value: &str) -> std::result::Result<NaiveDateTime, MetadataError> {
    NaiveDateTime::parse_from_str(value.trim(), EXIF_DATETIME_FORMAT).map_err(|source| {
        MetadataError::Parse {
            value: value.to_string(),
            source,
        }
    })
}

/// Filesystem last-modified time, normalized to UTC calendar time
fn modified_at(path: &Path) -> Result<NaiveDateTime> {
    let modified = std::fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified).naive_utc())
}

// -- Tests --
