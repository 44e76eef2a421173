//! Rectilinear front-lens projection.
//!
//! Models a forward-facing rectilinear view of a full spherical source. The
//! output position is read as a pair of angles spanning half a sphere, lifted
//! onto the unit sphere, then re-read against the source image's own
//! spherical parameterization (polar axis along +y) and flattened into
//! centered source coordinates.

use std::f64::consts::PI;

use crate::coordinates::{Cartesian2, Cartesian3};

use super::SourceExtent;

/// Maps a normalized output position to the source pixel it samples.
///
/// `out` has both components in `[0, 1]`. The result is in source-pixel
/// units, unrounded and unclamped.
pub fn source_position(out: Cartesian2, src: SourceExtent) -> Cartesian2 {
    // One unit of output spans pi radians, so the raster covers half a sphere.
    let theta = (1.0 - out.x) * PI;
    let phi = out.y * PI;

    let sphere = Cartesian3::from_spherical(theta, phi);

    // The same direction in the source's spherical frame, polar axis on +y.
    let theta2 = (-sphere.z).atan2(sphere.x);
    let phi2 = sphere.y.acos() / PI;

    Cartesian2::new(
        (phi2 * theta2.cos() + 0.5) * src.width,
        (phi2 * theta2.sin() + 0.5) * src.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    const SRC: SourceExtent = SourceExtent {
        width: 400.0,
        height: 400.0,
    };

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 0.0)]
    #[case(0.0, 1.0)]
    #[case(1.0, 1.0)]
    fn corners_are_finite_and_reproducible(#[case] x: f64, #[case] y: f64) {
        let first = source_position(Cartesian2::new(x, y), SRC);
        let second = source_position(Cartesian2::new(x, y), SRC);

        assert!(first.x.is_finite() && first.y.is_finite());
        // Pure function: bit-for-bit identical on repeated evaluation
        assert_eq!(first, second);
    }

    #[test]
    fn top_corners_land_on_the_source_top_center() {
        // out (0,0): the unit-sphere point is the +z pole, which the source
        // frame reads at theta2 = -pi/2, phi2 = 1/2, i.e. (w/2, 0).
        let top_left = source_position(Cartesian2::new(0.0, 0.0), SRC);
        assert_relative_eq!(top_left.x, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top_left.y, 0.0, epsilon = 1e-9);

        let top_right = source_position(Cartesian2::new(1.0, 0.0), SRC);
        assert_relative_eq!(top_right.x, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top_right.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn bottom_corners_land_on_the_source_bottom_center() {
        // out (0,1): the -z pole, read at theta2 = +pi/2, so (w/2, h).
        let bottom_left = source_position(Cartesian2::new(0.0, 1.0), SRC);
        assert_relative_eq!(bottom_left.x, 200.0, epsilon = 1e-9);
        assert_relative_eq!(bottom_left.y, 400.0, epsilon = 1e-9);

        let bottom_right = source_position(Cartesian2::new(1.0, 1.0), SRC);
        assert_relative_eq!(bottom_right.x, 200.0, epsilon = 1e-9);
        assert_relative_eq!(bottom_right.y, 400.0, epsilon = 1e-9);
    }

    #[test]
    fn output_center_is_the_source_center() {
        // out (0.5, 0.5) looks straight down the source's polar axis:
        // phi2 = acos(1) = 0, so the angular term vanishes exactly.
        let center = source_position(Cartesian2::new(0.5, 0.5), SRC);
        assert_eq!(center.x, 200.0);
        assert_eq!(center.y, 200.0);
    }

    #[test]
    fn spherical_round_trip_matches_hand_computed_values() {
        // out (0.75, 0.5): theta = pi/4, phi = pi/2, a point on the equator.
        // Source frame: theta2 = atan2(0, cos(pi/4)) = 0,
        // phi2 = acos(sin(pi/4))/pi = 1/4, hence (0.25 + 0.5) * w on x.
        let pos = source_position(Cartesian2::new(0.75, 0.5), SRC);
        assert_relative_eq!(pos.x, 300.0, epsilon = 1e-9);
        assert_relative_eq!(pos.y, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn rectangular_source_scales_each_axis_independently() {
        let wide = SourceExtent::new(800.0, 200.0);
        let pos = source_position(Cartesian2::new(0.0, 1.0), wide);
        assert_relative_eq!(pos.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(pos.y, 200.0, epsilon = 1e-9);
    }
}
