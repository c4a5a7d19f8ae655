use chrono::{Datelike, NaiveDateTime};
use std::path::PathBuf;

use crate::types::BucketMode;

/// Map a timestamp and granularity mode to a bucket directory, relative to
/// the output root.
///
/// Weekly buckets split a month into seven-day slices: days 1-7 are
/// "Week 01", days 8-14 "Week 02", and so on up to "Week 05".
pub fn bucket_dir(timestamp: NaiveDateTime, mode: BucketMode) -> PathBuf {
    let year = timestamp.year().to_string();
    let month = format!("{:02}", timestamp.month());

    match mode {
        BucketMode::Yearly => PathBuf::from(year),
        BucketMode::Monthly => [year, month].iter().collect(),
        BucketMode::Weekly => {
            let week = (timestamp.day() - 1) / 7 + 1;
            [year, month, format!("Week {week:02}")].iter().collect()
        }
    }
}

// -- Tests --
