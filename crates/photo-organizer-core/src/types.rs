use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::perceptual::AverageHash;

/// Media classification derived from a file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
    Unknown,
}

impl MediaKind {
    /// Determine the media kind from a file's extension (case-insensitive).
    /// Missing or unlisted extensions classify as `Unknown`.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Self::Unknown;
        };

        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" => Self::Image,
            "mov" | "mp4" | "mpeg" | "mpg" | "avi" => Self::Video,
            _ => Self::Unknown,
        }
    }
}

/// Bucket granularity for the output tree, chosen once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketMode {
    Weekly,
    Monthly,
    Yearly,
}

impl Default for BucketMode {
    fn default() -> Self {
        Self::Weekly
    }
}

/// Dedup key for a file.
///
/// Images carry a perceptual hash; videos carry their input path, which is
/// unique within one walk. The two variants never compare equal, so an image
/// hash can't silently collide with a video identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    Image(AverageHash),
    Video(PathBuf),
}

/// How the placement engine disposed of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// First sighting of this fingerprint, filed into its date bucket
    Organized,

    /// Fingerprint already seen, filed under the bucket's duplicates folder
    Duplicate,

    /// Extension is not a supported image or video type
    Unknown,

    /// Classified as an image but failed to decode
    Broken,
}

/// A placement decision for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Destination path relative to the output root
    pub relative_path: PathBuf,

    /// How the destination was decided
    pub disposition: Disposition,
}

impl Placement {
    pub(crate) fn new(relative_path: PathBuf, disposition: Disposition) -> Self {
        Self {
            relative_path,
            disposition,
        }
    }
}

// -- Tests --

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_image_extensions() {
        for name in ["a.jpg", "a.jpeg", "a.png", "a.gif", "a.bmp"] {
            assert_eq!(MediaKind::from_path(Path::new(name)), MediaKind::Image);
        }
    }

    #[test]
    fn classifies_video_extensions() {
        for name in ["a.mov", "a.mp4", "a.mpeg", "a.mpg", "a.avi"] {
            assert_eq!(MediaKind::from_path(Path::new(name)), MediaKind::Video);
        }
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(MediaKind::from_path(Path::new("a.JPG")), MediaKind::Image);
        assert_eq!(MediaKind::from_path(Path::new("a.Mp4")), MediaKind::Video);
        assert_eq!(MediaKind::from_path(Path::new("a.GiF")), MediaKind::Image);
    }

    #[test]
    fn unlisted_extensions_are_unknown() {
        assert_eq!(MediaKind::from_path(Path::new("a.txt")), MediaKind::Unknown);
        assert_eq!(MediaKind::from_path(Path::new("a.raw")), MediaKind::Unknown);
        assert_eq!(MediaKind::from_path(Path::new("noext")), MediaKind::Unknown);
        assert_eq!(MediaKind::from_path(Path::new(".hidden")), MediaKind::Unknown);
    }

    #[test]
    fn fingerprints_never_compare_across_kinds() {
        let image = Fingerprint::Image(AverageHash(0));
        let video = Fingerprint::Video(PathBuf::from("a.mp4"));
        assert_ne!(image, video);
    }
}
