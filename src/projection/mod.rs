//! Camera/lens projection evaluators.
//!
//! Each submodule implements one projection as a pure function from a
//! normalized output position (both components in `[0, 1]`) to an unrounded
//! source-pixel position. Evaluators never clamp to the source extent:
//! positions whose projection falls off the source image come back outside
//! `[0, width) x [0, height)`, which is expected at image edges and poles.
//! Rounding and any bounds handling are the caller's job.

pub mod equirectangular;
pub mod front;

use std::fmt;

use clap::ValueEnum;

/// The projection model mapping output pixels to source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectionMode {
    /// Rectilinear front-lens view of a full spherical source
    Front,
    /// Reverse-equirectangular source layout through a stereographic transform
    Equirectangular,
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionMode::Front => write!(f, "front"),
            ProjectionMode::Equirectangular => write!(f, "equirectangular"),
        }
    }
}

/// Pixel dimensions of the image being remapped *from*, as real numbers
/// ready for the evaluator math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceExtent {
    /// Source image width in pixels
    pub width: f64,
    /// Source image height in pixels
    pub height: f64,
}

impl SourceExtent {
    pub fn new(width: f64, height: f64) -> Self {
        SourceExtent { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display_matches_cli_names() {
        assert_eq!(ProjectionMode::Front.to_string(), "front");
        assert_eq!(
            ProjectionMode::Equirectangular.to_string(),
            "equirectangular"
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            ProjectionMode::from_str("front", true).unwrap(),
            ProjectionMode::Front
        );
        assert_eq!(
            ProjectionMode::from_str("equirectangular", true).unwrap(),
            ProjectionMode::Equirectangular
        );

        // Unrecognized modes are a configuration error, caught at parse time
        assert!(ProjectionMode::from_str("fisheye", true).is_err());
    }
}
