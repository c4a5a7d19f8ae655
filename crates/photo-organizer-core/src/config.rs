use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::BucketMode;

/// Configuration for one organizing run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bucket granularity for the output tree
    pub mode: BucketMode,

    /// Output root override. When unset, the input directory path with
    /// "-organized" appended is used.
    pub output_dir: Option<PathBuf>,

    /// Whether the directory walk follows symbolic links
    pub follow_links: bool,

    /// Directory for the debug log file
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: BucketMode::Weekly,
            output_dir: None,
            follow_links: false,
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Configuration(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the output root for a given input directory
    pub fn output_root(&self, input_dir: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => {
                let mut name = input_dir.as_os_str().to_os_string();
                name.push("-organized");
                PathBuf::from(name)
            }
        }
    }
}

// -- Tests --
