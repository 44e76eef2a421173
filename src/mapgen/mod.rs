//! Map generation: drives the projection evaluators over the target grid.
//!
//! [`generate`] walks every output cell, evaluates the configured projection
//! at that cell's normalized position, and stores the rounded source
//! coordinates in two integer grids of identical shape. Every cell is
//! written exactly once; cells are mutually independent, so iteration order
//! has no effect on the result.

use log::debug;
use ndarray::Array2;

use crate::coordinates::Cartesian2;
use crate::projection::{equirectangular, front, ProjectionMode, SourceExtent};
use crate::{RemapError, Result};

/// Immutable generation parameters, read-only after construction.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Source image width in pixels
    pub source_width: u32,
    /// Source image height in pixels
    pub source_height: u32,
    /// Target map height in rows
    pub rows: usize,
    /// Target map width in columns
    pub cols: usize,
    /// Projection model to evaluate
    pub mode: ProjectionMode,
    /// Azimuthal offset for the equirectangular mode, as a fraction of a
    /// full turn
    pub theta_adj: f64,
    /// Emit progress reporting
    pub verbose: bool,
}

impl MapConfig {
    /// Creates a configuration, rejecting empty source or target dimensions.
    pub fn new(
        source_width: u32,
        source_height: u32,
        rows: usize,
        cols: usize,
        mode: ProjectionMode,
    ) -> Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(RemapError::Config(
                "source width and height must be positive".to_string(),
            ));
        }
        if rows == 0 || cols == 0 {
            return Err(RemapError::Config(
                "target rows and cols must be positive".to_string(),
            ));
        }

        Ok(MapConfig {
            source_width,
            source_height,
            rows,
            cols,
            mode,
            theta_adj: 0.0,
            verbose: false,
        })
    }

    /// Sets the azimuthal offset (meaningful for the equirectangular mode)
    pub fn with_theta_adj(mut self, theta_adj: f64) -> Self {
        self.theta_adj = theta_adj;
        self
    }

    /// Enables or disables progress reporting
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The source dimensions as real numbers for the evaluator math
    pub fn source_extent(&self) -> SourceExtent {
        SourceExtent::new(f64::from(self.source_width), f64::from(self.source_height))
    }
}

/// The two coordinate grids produced by one generation run.
///
/// `x[[row, col]]` and `y[[row, col]]` hold the source-pixel coordinate that
/// output cell `(row, col)` should sample. Both grids always share the same
/// `(rows, cols)` shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMaps {
    /// Source x-coordinates, one per output cell
    pub x: Array2<i32>,
    /// Source y-coordinates, one per output cell
    pub y: Array2<i32>,
}

impl CoordinateMaps {
    /// Shape of both grids as `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.x.dim()
    }
}

/// Generates the x and y coordinate maps for the given configuration.
///
/// Cell `(row, col)` is evaluated at normalized position
/// `(col / cols, row / rows)` and holds the evaluator's result rounded to
/// the nearest integer, ties away from zero (`f64::round`). A non-finite
/// evaluator result follows Rust's float-to-int cast: infinities saturate
/// at the `i32` bounds and NaN becomes 0.
pub fn generate(cfg: &MapConfig) -> CoordinateMaps {
    let shape = (cfg.rows, cfg.cols);
    let mut xmap = Array2::<i32>::zeros(shape);
    let mut ymap = Array2::<i32>::zeros(shape);
    let src = cfg.source_extent();

    debug!(
        "generating {}x{} maps, {} mode, source {}x{}",
        cfg.rows, cfg.cols, cfg.mode, cfg.source_width, cfg.source_height
    );

    for row in 0..cfg.rows {
        for col in 0..cfg.cols {
            let out = Cartesian2::new(
                col as f64 / cfg.cols as f64,
                row as f64 / cfg.rows as f64,
            );
            let sample = match cfg.mode {
                ProjectionMode::Front => front::source_position(out, src),
                ProjectionMode::Equirectangular => {
                    equirectangular::source_position(out, src, cfg.theta_adj)
                }
            };
            xmap[[row, col]] = round_to_pixel(sample.x);
            ymap[[row, col]] = round_to_pixel(sample.y);
        }
    }

    CoordinateMaps { x: xmap, y: ymap }
}

/// Nearest-integer rounding, ties away from zero. Non-finite values take
/// the cast's saturating behavior.
fn round_to_pixel(value: f64) -> i32 {
    value.round() as i32
}
