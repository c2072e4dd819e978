//! Display precision for rendered gauge readings.

#[cfg(feature = "cli")]
use std::path::Path;

#[cfg(feature = "cli")]
use crate::errors::{GaugeError, Result};

/// Number of decimals printed for each derived field.
///
/// The defaults reproduce the classic AWG calculator layout: four decimals
/// everywhere except square inches, which get five.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Decimals for the diameter in millimetres.
    pub diameter_mm_decimals: usize,
    /// Decimals for the diameter in inches.
    pub diameter_in_decimals: usize,
    /// Decimals for the area in square millimetres.
    pub area_mm2_decimals: usize,
    /// Decimals for the area in square inches.
    pub area_in2_decimals: usize,
    /// Decimals for the area in KCMIL.
    pub area_kcmil_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            diameter_mm_decimals: 4,
            diameter_in_decimals: 4,
            area_mm2_decimals: 4,
            area_in2_decimals: 5,
            area_kcmil_decimals: 4,
        }
    }
}

#[cfg(feature = "cli")]
impl DisplayConfig {
    /// Parses a TOML document; keys that are absent keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GaugeError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GaugeError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
