//! AWG gauge numbers and the closed-form dimensions derived from them.

use std::fmt;

use crate::constants::{
    DIAMETER_RATIO, GAUGE_STEPS, KCMIL_PER_SQUARE_INCH_DIAMETER, MAX_GAUGE, MIN_GAUGE,
    REFERENCE_DIAMETER_IN, REFERENCE_DIAMETER_MM, REFERENCE_GAUGE,
};
use crate::errors::{GaugeError, Result};
use crate::math::{circle_area, Scalar};
use crate::units::{Inches, Kcmils, Millimeters, SquareInches, SquareMillimeters};

/// A validated American Wire Gauge number in `0..=40`.
///
/// Larger numbers denote thinner wire. Holding an `Awg` is proof that the
/// value lies in the supported range, so [`compute`] has no error path.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u8")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Awg(u8);

impl Awg {
    /// Largest supported wire, AWG 0.
    pub const MIN: Self = Self(MIN_GAUGE);
    /// Thinnest supported wire, AWG 40.
    pub const MAX: Self = Self(MAX_GAUGE);

    /// Validates a raw gauge number.
    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(n) if (MIN_GAUGE..=MAX_GAUGE).contains(&n) => Ok(Self(n)),
            _ => Err(GaugeError::OutOfRange {
                value: value.to_string(),
            }),
        }
    }

    /// Returns the gauge number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterates every supported gauge in ascending order, 0 through 40.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (MIN_GAUGE..=MAX_GAUGE).map(Self)
    }
}

impl TryFrom<i64> for Awg {
    type Error = GaugeError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Scalar> for Awg {
    type Error = GaugeError;

    /// Accepts whole numbers in range; the range is checked before the
    /// fractional part, so `40.5` reports out of range rather than fractional.
    fn try_from(value: Scalar) -> Result<Self> {
        if value.is_nan()
            || value < Scalar::from(MIN_GAUGE)
            || value > Scalar::from(MAX_GAUGE)
        {
            return Err(GaugeError::OutOfRange {
                value: value.to_string(),
            });
        }
        if value.fract() != 0.0 {
            return Err(GaugeError::NotWholeNumber(value));
        }
        // In range and integral, so the cast is exact.
        Ok(Self(value as u8))
    }
}

impl From<Awg> for u8 {
    fn from(awg: Awg) -> Self {
        awg.0
    }
}

impl fmt::Display for Awg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical dimensions of a solid round conductor of one AWG size.
///
/// Every field is a pure function of the gauge number; a reading is never
/// modified after construction.
///
/// Deserializing reads only `awg` and recomputes the rest, so stored
/// dimensions can never disagree with their gauge.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "StoredReading")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeReading {
    awg: Awg,
    diameter_mm: Scalar,
    area_mm2: Scalar,
    diameter_in: Scalar,
    area_in2: Scalar,
    area_kcmil: Scalar,
}

impl GaugeReading {
    /// Computes the dimensions of `awg`.
    #[must_use]
    pub fn new(awg: Awg) -> Self {
        let exponent = (REFERENCE_GAUGE - Scalar::from(awg.get())) / GAUGE_STEPS;
        let growth = DIAMETER_RATIO.powf(exponent);
        let diameter_in = REFERENCE_DIAMETER_IN * growth;
        let diameter_mm = REFERENCE_DIAMETER_MM * growth;

        Self {
            awg,
            diameter_mm,
            area_mm2: circle_area(diameter_mm),
            diameter_in,
            area_in2: circle_area(diameter_in),
            area_kcmil: KCMIL_PER_SQUARE_INCH_DIAMETER * diameter_in.powi(2),
        }
    }

    /// Gauge number this reading was computed for.
    #[must_use]
    pub const fn awg(&self) -> Awg {
        self.awg
    }

    /// Diameter in millimetres.
    #[must_use]
    pub const fn diameter_mm(&self) -> Scalar {
        self.diameter_mm
    }

    /// Cross-sectional area in square millimetres.
    #[must_use]
    pub const fn area_mm2(&self) -> Scalar {
        self.area_mm2
    }

    /// Diameter in inches.
    #[must_use]
    pub const fn diameter_in(&self) -> Scalar {
        self.diameter_in
    }

    /// Cross-sectional area in square inches.
    #[must_use]
    pub const fn area_in2(&self) -> Scalar {
        self.area_in2
    }

    /// Cross-sectional area in thousands of circular mils.
    #[must_use]
    pub const fn area_kcmil(&self) -> Scalar {
        self.area_kcmil
    }

    /// Diameter as a typed metric quantity.
    #[must_use]
    pub const fn diameter(&self) -> Millimeters {
        Millimeters::new(self.diameter_mm)
    }

    /// Area as a typed metric quantity.
    #[must_use]
    pub const fn area(&self) -> SquareMillimeters {
        SquareMillimeters::new(self.area_mm2)
    }

    /// Diameter as a typed imperial quantity.
    #[must_use]
    pub const fn diameter_inches(&self) -> Inches {
        Inches::new(self.diameter_in)
    }

    /// Area as a typed imperial quantity.
    #[must_use]
    pub const fn area_square_inches(&self) -> SquareInches {
        SquareInches::new(self.area_in2)
    }

    /// Area as a typed circular-mil quantity.
    #[must_use]
    pub const fn area_kcmils(&self) -> Kcmils {
        Kcmils::new(self.area_kcmil)
    }
}

impl From<Awg> for GaugeReading {
    fn from(awg: Awg) -> Self {
        Self::new(awg)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StoredReading {
    awg: Awg,
}

#[cfg(feature = "serde")]
impl From<StoredReading> for GaugeReading {
    fn from(stored: StoredReading) -> Self {
        Self::new(stored.awg)
    }
}

/// Computes the full set of dimensions for a gauge.
#[must_use]
pub fn compute(awg: Awg) -> GaugeReading {
    GaugeReading::new(awg)
}

/// Computes the dimensions for a raw gauge number, rejecting values outside
/// `0..=40`.
pub fn try_compute(awg: i64) -> Result<GaugeReading> {
    Awg::new(awg).map(compute)
}
