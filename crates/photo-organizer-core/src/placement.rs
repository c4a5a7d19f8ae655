//! The placement decision engine.
//!
//! Given one input file and the accumulated dedup state, compute its
//! destination path relative to the output root:
//!
//! - `unknown/<name>` for unsupported extensions
//! - `broken/<name>` for images that fail to decode
//! - `<bucket>/<name>` for the first file with a given fingerprint
//! - `<bucket>/duplicates/<name>` for later files with the same fingerprint
//!
//! The engine reads the filesystem only to decode images and stat
//! modification times. It never writes; copying is the runner's job.

use log::debug;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::bucket::bucket_dir;
use crate::error::{Error, Result};
use crate::perceptual::AverageHash;
use crate::registry::SeenRegistry;
use crate::timestamp::resolve_timestamp;
use crate::types::{BucketMode, Disposition, Fingerprint, MediaKind, Placement};

/// Directory for files whose extension is neither image nor video
const UNKNOWN_DIR: &str = "unknown";

/// Directory for images that cannot be decoded
const BROKEN_DIR: &str = "broken";

/// Per-bucket directory for files whose fingerprint was already seen
const DUPLICATES_DIR: &str = "duplicates";

/// Decide where one input file belongs in the output tree.
///
/// Mutates `registry` exactly once, on the first occurrence of a
/// fingerprint; unknown, broken, and duplicate paths leave it untouched.
pub fn place(path: &Path, mode: BucketMode, registry: &mut SeenRegistry) -> Result<Placement> {
    let file_name = path
        .file_name()
        .map(OsStr::to_os_string)
        .ok_or_else(|| Error::NoFileName(path.to_path_buf()))?;

    let kind = MediaKind::from_path(path);
    debug!("Classified {} as {:?}", path.display(), kind);

    let (timestamp, fingerprint) = match kind {
        MediaKind::Unknown => {
            return Ok(Placement::new(
                Path::new(UNKNOWN_DIR).join(&file_name),
                Disposition::Unknown,
            ));
        }
        MediaKind::Image => {
            // A file that fails to decode is never hashed or dated.
            let image = match image::open(path) {
                Ok(image) => image,
                Err(e) => {
                    debug!("Cannot decode {}: {e}", path.display());
                    return Ok(Placement::new(
                        Path::new(BROKEN_DIR).join(&file_name),
                        Disposition::Broken,
                    ));
                }
            };

            let timestamp = resolve_timestamp(MediaKind::Image, path)?;
            (timestamp, Fingerprint::Image(AverageHash::of(&image)))
        }
        MediaKind::Video => {
            let timestamp = resolve_timestamp(MediaKind::Video, path)?;
            (timestamp, Fingerprint::Video(path.to_path_buf()))
        }
    };

    let bucket = bucket_dir(timestamp, mode);

    if registry.contains(&fingerprint) {
        debug!("Duplicate fingerprint for {}", path.display());
        return Ok(Placement::new(
            bucket.join(DUPLICATES_DIR).join(&file_name),
            Disposition::Duplicate,
        ));
    }

    registry.record(fingerprint);
    Ok(Placement::new(bucket.join(&file_name), Disposition::Organized))
}

/// Convenience wrapper resolving a placement against an output root
pub fn place_under(
    path: &Path,
    output_root: &Path,
    mode: BucketMode,
    registry: &mut SeenRegistry,
) -> Result<(PathBuf, Disposition)> {
    let placement = place(path, mode, registry)?;
    Ok((
        output_root.join(&placement.relative_path),
        placement.disposition,
    ))
}

// -- Tests --
