#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Conversion factors and the constants of the gauge formula.
pub mod constants;
/// Strongly typed unit helpers and the tagged measurement union.
pub mod units;
/// Shared numerical primitives.
pub mod math;
/// Gauge numbers and the dimensions computed from them.
pub mod gauge;
/// Nearest-gauge lookup from diameters and areas.
pub mod resolver;
/// Display precision for rendered readings.
pub mod config;
/// Editable six-field gauge form.
pub mod form;
/// Line-oriented driver for the gauge form.
pub mod session;
/// Error types shared between modules.
pub mod errors;
/// Tracing subscriber setup for the command-line front end.
#[cfg(feature = "cli")]
pub mod logging;

/// Common exports for downstream crates.
pub mod prelude;

pub use config::DisplayConfig;
pub use errors::GaugeError;
pub use gauge::{compute, try_compute, Awg, GaugeReading};
pub use resolver::{nearest, nearest_by_area, nearest_by_diameter, resolve};
pub use units::{Measurement, UnitSystem};
