//! Nearest-gauge lookup from a physical measurement.
//!
//! The domain is 41 gauges, so every lookup is a plain ascending scan. The
//! comparison is strict, which makes the lowest gauge number (the larger wire)
//! win when two gauges are exactly equidistant from the target.

use crate::gauge::{compute, Awg, GaugeReading};
use crate::math::Scalar;
use crate::units::{Measurement, MetricMeasurement};

/// Returns the gauge whose `key` value is closest to `target`.
///
/// Ties resolve to the first gauge in ascending order. A NaN target never
/// compares smaller than anything and therefore yields [`Awg::MIN`].
#[must_use]
pub fn nearest_by<F>(target: Scalar, key: F) -> Awg
where
    F: Fn(&GaugeReading) -> Scalar,
{
    let mut closest = Awg::MIN;
    let mut closest_diff = Scalar::INFINITY;

    for awg in Awg::all() {
        let diff = (key(&compute(awg)) - target).abs();
        if diff < closest_diff {
            closest_diff = diff;
            closest = awg;
        }
    }

    closest
}

/// Returns the gauge whose diameter is closest to `target_mm` millimetres.
#[must_use]
pub fn nearest_by_diameter(target_mm: Scalar) -> Awg {
    nearest_by(target_mm, GaugeReading::diameter_mm)
}

/// Returns the gauge whose area is closest to `target_mm2` square millimetres.
#[must_use]
pub fn nearest_by_area(target_mm2: Scalar) -> Awg {
    nearest_by(target_mm2, GaugeReading::area_mm2)
}

/// Normalizes `measurement` to metric and returns the closest gauge.
#[must_use]
pub fn nearest(measurement: Measurement) -> Awg {
    match measurement.to_metric() {
        MetricMeasurement::Diameter(mm) => nearest_by_diameter(mm.value()),
        MetricMeasurement::Area(mm2) => nearest_by_area(mm2.value()),
    }
}

/// Resolves `measurement` to the closest gauge and computes its dimensions.
#[must_use]
pub fn resolve(measurement: Measurement) -> GaugeReading {
    compute(nearest(measurement))
}
