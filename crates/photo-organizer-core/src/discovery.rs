use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};

/// Enumerate every file under the input directory.
///
/// All files are returned regardless of type; classification happens in the
/// placement engine. Entries that cannot be read are skipped. The walk is
/// depth-first in directory order, so repeated runs over an unchanged tree
/// visit files in the same order.
pub fn discover_files(directory: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(Error::NotADirectory(directory.to_path_buf()));
    }

    let files = WalkDir::new(directory)
        .follow_links(config.follow_links)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    Ok(files)
}

// -- Tests --
