//! Conversion factors and the constants of the AWG diameter formula.
//!
//! ## Gauge formula
//!
//! AWG sizes follow a geometric progression: 39 steps separate AWG 36
//! (0.005 in) from AWG 0000 (0.46 in), a diameter ratio of 92. The diameter of
//! gauge `n` is therefore
//!
//! ```text
//! d(n) = 0.005 in × 92^((36 − n) / 39)
//! ```
//!
//! ## References
//!
//! - ASTM B258, Standard Specification for Standard Nominal Diameters and
//!   Cross-Sectional Areas of AWG Sizes of Solid Round Wires.
//! - The inch is exactly 25.4 mm by the 1959 international yard and pound
//!   agreement, so both factors below are exact.

use crate::math::Scalar;

/// Millimetres per inch (exact).
pub const MM_PER_INCH: Scalar = 25.4;
/// Square millimetres per square inch (exact, 25.4²).
pub const MM2_PER_SQUARE_INCH: Scalar = 645.16;
/// Thousand circular mils per squared inch of diameter.
///
/// One circular mil is the area of a circle one mil (0.001 in) across, so a
/// wire of diameter `d` inches has `(1000 d)²` circular mils, i.e. `1000 d²`
/// KCMIL.
pub const KCMIL_PER_SQUARE_INCH_DIAMETER: Scalar = 1000.0;

/// Gauge whose diameter anchors the formula.
pub const REFERENCE_GAUGE: Scalar = 36.0;
/// Diameter of the reference gauge in inches.
pub const REFERENCE_DIAMETER_IN: Scalar = 0.005;
/// Diameter of the reference gauge in millimetres.
pub const REFERENCE_DIAMETER_MM: Scalar = 0.127;
/// Ratio between the AWG 0000 and AWG 36 diameters.
pub const DIAMETER_RATIO: Scalar = 92.0;
/// Number of gauge steps spanned by [`DIAMETER_RATIO`].
pub const GAUGE_STEPS: Scalar = 39.0;

/// Smallest supported gauge number (largest wire).
pub const MIN_GAUGE: u8 = 0;
/// Largest supported gauge number (thinnest wire).
pub const MAX_GAUGE: u8 = 40;

/// Converts a length in inches to millimetres.
#[inline]
#[must_use]
pub fn inches_to_mm(inches: Scalar) -> Scalar {
    inches * MM_PER_INCH
}

/// Converts an area in square inches to square millimetres.
#[inline]
#[must_use]
pub fn square_inches_to_mm2(square_inches: Scalar) -> Scalar {
    square_inches * MM2_PER_SQUARE_INCH
}
