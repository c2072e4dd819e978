//! Shared numerical primitives.

use std::f64::consts::FRAC_PI_4;

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Area of a circle with the given diameter, `(π/4) d²`.
#[inline]
#[must_use]
pub fn circle_area(diameter: Scalar) -> Scalar {
    FRAC_PI_4 * diameter.powi(2)
}
