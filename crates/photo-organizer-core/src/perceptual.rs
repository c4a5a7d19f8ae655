//! # Perceptual Hashing
//!
//! Average-hash fingerprinting for duplicate photo detection.
//!
//! The average hash downsamples an image to an 8×8 grid, converts each cell
//! to grayscale, and emits one bit per cell indicating whether that cell is
//! at least as bright as the grid mean. Visually identical images produce
//! identical 64-bit signatures regardless of resolution or encoding.
//!
//! Deduplication treats these signatures as exact-match keys: two images are
//! duplicates only when their hashes are bit-for-bit equal. No Hamming
//! distance threshold is applied, so near-duplicates that flip even one bit
//! are kept as distinct files.

use image::{DynamicImage, GenericImageView};
use std::fmt;

/// A 64-bit average-hash signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AverageHash(pub u64);

impl AverageHash {
    /// Compute the 8×8 average hash of an image
    pub fn of(img: &DynamicImage) -> Self {
        let small = img.resize_exact(8, 8, image::imageops::FilterType::Nearest);

        // Grayscale formula: 0.299*R + 0.587*G + 0.114*B
        let mut cells = [0.0f32; 64];
        for y in 0..8 {
            for x in 0..8 {
                let pixel = small.get_pixel(x, y);
                let gray =
                    0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32;
                cells[(y as usize) * 8 + (x as usize)] = gray;
            }
        }

        // f64 accumulator keeps the sum exact, so a uniform image compares
        // equal to its own mean rather than drifting a rounding step away.
        let mean = cells.iter().map(|&c| f64::from(c)).sum::<f64>() / 64.0;

        // One bit per cell: set when the cell is at least as bright as the mean
        let mut hash: u64 = 0;
        for (bit_pos, &cell) in cells.iter().enumerate() {
            if f64::from(cell) >= mean {
                hash |= 1u64 << bit_pos;
            }
        }

        AverageHash(hash)
    }

    /// Calculate the Hamming distance between two hashes
    pub fn distance(&self, other: &AverageHash) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

impl fmt::Display for AverageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// -- Tests --
