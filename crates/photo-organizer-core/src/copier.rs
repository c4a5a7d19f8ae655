//! Collision-safe file copying.
//!
//! The copier creates missing parent directories, never overwrites an
//! existing file, and preserves the source's modification time so a later
//! run resolves the same timestamps.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Copy `source` to `desired`, disambiguating name collisions.
///
/// If `desired` already exists, a zero-padded 4-digit counter is appended
/// before the extension (`name-0001.jpg`, `name-0002.jpg`, ...) until a free
/// name is found. Returns the path actually written.
pub fn copy_file(source: &Path, desired: &Path) -> Result<PathBuf> {
    if let Some(parent) = desired.parent() {
        fs::create_dir_all(parent)?;
    }

    let destination = unique_destination(desired);
    debug!(
        "Copying {} to {}",
        source.display(),
        destination.display()
    );

    fs::copy(source, &destination)?;
    preserve_modified_time(source, &destination)?;
    Ok(destination)
}

/// First free variant of the desired destination path
fn unique_destination(desired: &Path) -> PathBuf {
    if !desired.exists() {
        return desired.to_path_buf();
    }

    let stem = desired
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = desired
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = desired.parent().unwrap_or_else(|| Path::new(""));

    let mut index = 0u32;
    loop {
        index += 1;
        let candidate = parent.join(format!("{stem}-{index:04}{extension}"));
        if !candidate.exists() {
            return candidate;
        }
    }
}

/// Carry the source's mtime over to the copy
fn preserve_modified_time(source: &Path, destination: &Path) -> Result<()> {
    let modified = fs::metadata(source)?.modified()?;
    let file = fs::OpenOptions::new().write(true).open(destination)?;
    file.set_modified(modified)?;
    Ok(())
}

// -- Tests --
