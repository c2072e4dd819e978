//! Strongly typed unit helpers and the tagged measurement union.
//!
//! [`Quantity`] pairs a value with a zero-sized unit marker so that inches
//! cannot be handed to code expecting millimetres. Conversions between the
//! markers go through the exact factors in [`crate::constants`].

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::marker::PhantomData;

use crate::constants::{inches_to_mm, square_inches_to_mm2, KCMIL_PER_SQUARE_INCH_DIAMETER};
use crate::math::Scalar;

/// Marker trait implemented by every unit type.
pub trait Unit {
    /// Printable unit symbol.
    const SYMBOL: &'static str;
}

macro_rules! unit_marker {
    ($(#[$meta:meta])* $name:ident, $symbol:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Unit for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

unit_marker!(
    /// Length in millimetres.
    Millimeter,
    "mm"
);
unit_marker!(
    /// Area in square millimetres.
    SquareMillimeter,
    "mm²"
);
unit_marker!(
    /// Length in inches.
    Inch,
    "in"
);
unit_marker!(
    /// Area in square inches.
    SquareInch,
    "in²"
);
unit_marker!(
    /// Area in thousands of circular mils.
    Kcmil,
    "kcmil"
);

/// A value tagged with its unit at the type level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U> {
    value: T,
    unit: PhantomData<U>,
}

impl<T: Copy, U: Unit> Quantity<T, U> {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, U::SYMBOL),
            None => write!(f, "{} {}", self.value, U::SYMBOL),
        }
    }
}

/// Length in millimetres.
pub type Millimeters = Quantity<Scalar, Millimeter>;
/// Area in square millimetres.
pub type SquareMillimeters = Quantity<Scalar, SquareMillimeter>;
/// Length in inches.
pub type Inches = Quantity<Scalar, Inch>;
/// Area in square inches.
pub type SquareInches = Quantity<Scalar, SquareInch>;
/// Area in thousands of circular mils.
pub type Kcmils = Quantity<Scalar, Kcmil>;

impl Quantity<Scalar, Inch> {
    /// Converts to millimetres.
    #[must_use]
    pub fn to_millimeters(self) -> Millimeters {
        Quantity::new(inches_to_mm(self.value))
    }
}

impl Quantity<Scalar, SquareInch> {
    /// Converts to square millimetres.
    #[must_use]
    pub fn to_square_millimeters(self) -> SquareMillimeters {
        Quantity::new(square_inches_to_mm2(self.value))
    }
}

impl Quantity<Scalar, Kcmil> {
    /// Converts to the geometric cross-section in square inches.
    ///
    /// Works on the squared diameter directly, so negative inputs stay
    /// negative instead of becoming NaN.
    #[must_use]
    pub fn to_square_inches(self) -> SquareInches {
        let diameter_in_squared = self.value / KCMIL_PER_SQUARE_INCH_DIAMETER;
        Quantity::new(FRAC_PI_4 * diameter_in_squared)
    }

    /// Converts to square millimetres.
    #[must_use]
    pub fn to_square_millimeters(self) -> SquareMillimeters {
        self.to_square_inches().to_square_millimeters()
    }
}

/// Unit system tag carried alongside a raw measurement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Millimetres for lengths, square millimetres for areas.
    Millimeters,
    /// Inches for lengths, square inches for areas.
    Inches,
}

impl UnitSystem {
    /// Normalizes a length in this system to millimetres.
    #[must_use]
    pub fn length_to_mm(self, value: Scalar) -> Scalar {
        match self {
            Self::Millimeters => value,
            Self::Inches => Inches::new(value).to_millimeters().value(),
        }
    }

    /// Normalizes an area in this system to square millimetres.
    #[must_use]
    pub fn area_to_mm2(self, value: Scalar) -> Scalar {
        match self {
            Self::Millimeters => value,
            Self::Inches => SquareInches::new(value).to_square_millimeters().value(),
        }
    }
}

/// A physical measurement of a conductor, in any supported unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Conductor diameter.
    Diameter(Scalar, UnitSystem),
    /// Conductor cross-sectional area.
    Area(Scalar, UnitSystem),
    /// Conductor cross-section in thousands of circular mils.
    Kcmil(Scalar),
}

/// A measurement normalized to metric units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricMeasurement {
    /// Diameter in millimetres.
    Diameter(Millimeters),
    /// Area in square millimetres.
    Area(SquareMillimeters),
}

impl Measurement {
    /// Converts the measurement to millimetres or square millimetres.
    #[must_use]
    pub fn to_metric(self) -> MetricMeasurement {
        match self {
            Self::Diameter(value, unit) => {
                MetricMeasurement::Diameter(Millimeters::new(unit.length_to_mm(value)))
            }
            Self::Area(value, unit) => {
                MetricMeasurement::Area(SquareMillimeters::new(unit.area_to_mm2(value)))
            }
            Self::Kcmil(value) => MetricMeasurement::Area(Kcmils::new(value).to_square_millimeters()),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::circle_area;

    #[test]
    fn inch_diameter_normalizes_to_millimetres() {
        assert_relative_eq!(UnitSystem::Inches.length_to_mm(0.1), 2.54, max_relative = 1.0e-12);
        assert_relative_eq!(UnitSystem::Millimeters.length_to_mm(2.54), 2.54);
    }

    #[test]
    fn square_inch_area_normalizes_to_square_millimetres() {
        assert_relative_eq!(UnitSystem::Inches.area_to_mm2(1.0), 645.16, max_relative = 1.0e-12);
    }

    #[test]
    fn kcmil_matches_geometric_area() {
        // 1000 kcmil is a circle one inch across.
        let area = Kcmils::new(1000.0).to_square_inches();
        assert_relative_eq!(area.value(), circle_area(1.0), max_relative = 1.0e-12);

        match Measurement::Kcmil(1000.0).to_metric() {
            MetricMeasurement::Area(mm2) => {
                assert_relative_eq!(mm2.value(), circle_area(25.4), max_relative = 1.0e-12);
            }
            other => panic!("expected an area, got {other:?}"),
        }
    }

    #[test]
    fn negative_kcmil_converts_to_negative_area() {
        let area = Kcmils::new(-5.0).to_square_millimeters().value();
        assert!(area < 0.0);
        assert_relative_eq!(area, -circle_area(0.005_f64.sqrt() * 25.4), max_relative = 1.0e-12);
    }

    #[test]
    fn display_includes_symbol_and_precision() {
        let d = Millimeters::new(2.052_525);
        assert_eq!(format!("{d:.3}"), "2.053 mm");
        assert_eq!(format!("{}", Kcmils::new(6.5)), "6.5 kcmil");
    }
}
