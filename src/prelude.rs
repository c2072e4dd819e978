//! Convenience re-exports for gauge conversions.

pub use crate::config::DisplayConfig;
pub use crate::constants::*;
pub use crate::errors::GaugeError;
pub use crate::form::{leading_number, render_reading, FormField, GaugeForm, Submission};
pub use crate::gauge::{compute, try_compute, Awg, GaugeReading};
pub use crate::math::{circle_area, Scalar};
pub use crate::resolver::{nearest, nearest_by, nearest_by_area, nearest_by_diameter, resolve};
pub use crate::units::{
    Inch, Inches, Kcmil, Kcmils, Measurement, MetricMeasurement, Millimeter, Millimeters,
    Quantity, SquareInch, SquareInches, SquareMillimeter, SquareMillimeters, Unit, UnitSystem,
};
