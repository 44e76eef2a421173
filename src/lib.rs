//! Remapgen: coordinate remap-map generation for spherical video reprojection
//!
//! This crate computes, for every pixel of a target raster, the source-image
//! pixel it should sample under a chosen camera/lens projection, and writes
//! the resulting coordinate grids as a pair of ASCII PGM rasters. The output
//! pair plugs directly into ffmpeg's `remap` filter:
//!
//! ```text
//! gen_remap -x out_x.pgm -y out_y.pgm -w 1504 -H 1504 -r 752 -c 1504 -m equirectangular
//! ffmpeg -i input.mp4 -i out_x.pgm -i out_y.pgm -lavfi remap out.mp4
//! ```
//!
//! The projection evaluators in [`projection`] are pure functions from a
//! normalized output position to an unrounded source position; [`mapgen`]
//! drives them over the full target grid and [`pgm`] serializes the result.

use thiserror::Error;

pub mod coordinates;
pub mod mapgen;
pub mod pgm;
pub mod projection;

// Re-export commonly used types
pub use mapgen::{generate, CoordinateMaps, MapConfig};
pub use projection::{ProjectionMode, SourceExtent};

/// Main error type for the remapgen library
#[derive(Debug, Error)]
pub enum RemapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Map dimensions {rows}x{cols} exceed the {}x{} limit of the PGM writer",
        pgm::MAX_ROWS,
        pgm::MAX_COLS
    )]
    MapTooLarge { rows: usize, cols: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for remapgen operations
pub type Result<T> = std::result::Result<T, RemapError>;
