//! Reverse-equirectangular projection through a stereographic transform.
//!
//! The output raster is treated as a mirrored Cartesian plane, unwrapped
//! back onto the sphere as if it were an equirectangular layout, then
//! projected from the sphere onto the plane stereographically and rescaled
//! into centered source coordinates. An azimuthal offset (`theta_adj`, a
//! fraction of a full turn) rotates the unwrap before projection.
//!
//! The stereographic step divides by `1 - cos(phi)`, which is zero at
//! `phi = 0`. Generated positions keep `phi` in `(pi/2, pi]`, so the
//! singular pole is only reachable by calling the evaluator directly with
//! out-of-range input; the non-finite radius it produces is passed through
//! uncorrected.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::coordinates::{Cartesian2, Polar2, Polar3};

use super::SourceExtent;

/// Maps a normalized output position to the source pixel it samples.
///
/// `out` has both components in `[0, 1]`. The result is in source-pixel
/// units, unrounded and unclamped.
pub fn source_position(out: Cartesian2, src: SourceExtent, theta_adj: f64) -> Cartesian2 {
    let plane = Cartesian2::new(1.0 - out.x, 1.0 - out.y);

    // Reverse equirectangular projection: plane position to sphere angles.
    let sphere = Polar3::new(
        1.0,
        (plane.x - theta_adj) * 2.0 * PI,
        plane.y * FRAC_PI_2 + FRAC_PI_2,
    );

    // Stereographic projection from sphere to plane. Singular at phi = 0.
    let projected = Polar2::new(
        sphere.phi.sin() / (1.0 - sphere.phi.cos()),
        sphere.theta,
    );

    // Center and stretch into source-pixel space.
    let flat = projected.to_cartesian();
    Cartesian2::new(
        (flat.x + 1.0) / 2.0 * src.width,
        (flat.y + 1.0) / 2.0 * src.height,
    )
}
