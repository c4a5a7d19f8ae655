//! End-to-end tests for the organizing pipeline: walk, place, copy.

use chrono::{DateTime, Datelike, Utc};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use photo_organizer_core::{BucketMode, Config, Organizer};

fn write_split_png(dir: &Path, name: &str, vertical_split: bool) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(16, 16, |x, y| {
        let dark = if vertical_split { x < 8 } else { y < 8 };
        if dark {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
    .save(&path)
    .unwrap();
    path
}

/// The bucket the pipeline should derive for a file with no embedded
/// metadata: its mtime, as UTC calendar time.
fn expected_monthly_bucket(path: &Path) -> PathBuf {
    let mtime = fs::metadata(path).unwrap().modified().unwrap();
    let ts = DateTime::<Utc>::from(mtime).naive_utc();
    PathBuf::from(format!("{}/{:02}", ts.year(), ts.month()))
}

fn monthly_config(output: &Path) -> Config {
    Config {
        mode: BucketMode::Monthly,
        output_dir: Some(output.to_path_buf()),
        ..Config::default()
    }
}

#[test]
fn organizes_a_mixed_tree() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let photo = write_split_png(input.path(), "photo.png", true);
    fs::write(input.path().join("clip.mp4"), b"video bytes").unwrap();
    fs::write(input.path().join("notes.txt"), b"text").unwrap();
    fs::write(input.path().join("corrupt.jpg"), b"not a jpeg at all").unwrap();

    let mut organizer = Organizer::new(monthly_config(output.path()));
    let summary = organizer.run(input.path()).unwrap();

    assert_eq!(summary.organized, 2); // photo + clip
    assert_eq!(summary.unknown, 1);
    assert_eq!(summary.broken, 1);
    assert_eq!(summary.duplicates, 0);
    assert_eq!(summary.errors, 0);

    assert!(output.path().join("unknown/notes.txt").exists());
    assert!(output.path().join("broken/corrupt.jpg").exists());

    let bucket = expected_monthly_bucket(&photo);
    assert!(output.path().join(&bucket).join("photo.png").exists());
    assert!(output.path().join(&bucket).join("clip.mp4").exists());
}

#[test]
fn duplicate_images_land_in_the_duplicates_folder() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    // Same pixel content under two names, in different subdirectories.
    let original = write_split_png(input.path(), "original.png", true);
    let copies = input.path().join("copies");
    fs::create_dir(&copies).unwrap();
    write_split_png(&copies, "copy.png", true);

    let mut organizer = Organizer::new(monthly_config(output.path()));
    let summary = organizer.run(input.path()).unwrap();

    assert_eq!(summary.organized, 1);
    assert_eq!(summary.duplicates, 1);

    let bucket = expected_monthly_bucket(&original);
    let canonical: Vec<_> = ["original.png", "copy.png"]
        .iter()
        .filter(|name| output.path().join(&bucket).join(name).exists())
        .collect();
    let duplicates: Vec<_> = ["original.png", "copy.png"]
        .iter()
        .filter(|name| {
            output
                .path()
                .join(&bucket)
                .join("duplicates")
                .join(name)
                .exists()
        })
        .collect();

    // Exactly one occupies the canonical slot, the other the duplicates slot.
    assert_eq!(canonical.len(), 1);
    assert_eq!(duplicates.len(), 1);
    assert_ne!(canonical[0], duplicates[0]);
}

#[test]
fn same_name_files_in_different_folders_collide_safely() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    // Different content, same file name: both are "first seen" but want the
    // same destination path.
    let a_dir = input.path().join("a");
    let b_dir = input.path().join("b");
    fs::create_dir_all(&a_dir).unwrap();
    fs::create_dir_all(&b_dir).unwrap();
    let first = write_split_png(&a_dir, "photo.png", true);
    write_split_png(&b_dir, "photo.png", false);

    let mut organizer = Organizer::new(monthly_config(output.path()));
    let summary = organizer.run(input.path()).unwrap();

    assert_eq!(summary.organized, 2);
    assert_eq!(summary.duplicates, 0);

    let bucket = output.path().join(expected_monthly_bucket(&first));
    assert!(bucket.join("photo.png").exists());
    assert!(bucket.join("photo-0001.png").exists());
}

#[test]
fn default_output_root_is_input_plus_suffix() {
    let scratch = TempDir::new().unwrap();
    let input = scratch.path().join("holiday");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("notes.txt"), b"text").unwrap();

    let mut organizer = Organizer::new(Config::default());
    let summary = organizer.run(&input).unwrap();

    assert_eq!(summary.unknown, 1);
    assert!(scratch
        .path()
        .join("holiday-organized/unknown/notes.txt")
        .exists());
}

#[test]
fn missing_input_directory_fails_before_any_work() {
    let scratch = TempDir::new().unwrap();
    let mut organizer = Organizer::new(Config::default());
    assert!(organizer.run(&scratch.path().join("missing")).is_err());
}
