//! The six linked fields of the gauge form.
//!
//! A [`GaugeForm`] holds the last consistent [`GaugeReading`] and an optional
//! error banner. Editing any field goes through [`GaugeForm::submit`], which
//! either replaces the reading, clears the form, or raises the banner while
//! keeping the previous reading on display.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::errors::GaugeError;
use crate::gauge::{compute, Awg, GaugeReading};
use crate::math::Scalar;
use crate::resolver::nearest;
use crate::units::{Measurement, UnitSystem};

/// One editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Gauge number.
    Awg,
    /// Diameter in millimetres.
    DiameterMm,
    /// Diameter in inches.
    DiameterIn,
    /// Area in square millimetres.
    AreaMm2,
    /// Area in square inches.
    AreaIn2,
    /// Area in thousands of circular mils.
    AreaKcmil,
}

impl FormField {
    /// Every field in display order.
    pub const ALL: [Self; 6] = [
        Self::Awg,
        Self::DiameterMm,
        Self::DiameterIn,
        Self::AreaMm2,
        Self::AreaIn2,
        Self::AreaKcmil,
    ];

    /// Short name accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Awg => "awg",
            Self::DiameterMm => "mm",
            Self::DiameterIn => "in",
            Self::AreaMm2 => "mm2",
            Self::AreaIn2 => "in2",
            Self::AreaKcmil => "kcmil",
        }
    }

    /// Unit label shown after a rendered value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Awg => "AWG",
            Self::DiameterMm => "mm φ",
            Self::DiameterIn => "in φ",
            Self::AreaMm2 => "mm²",
            Self::AreaIn2 => "in²",
            Self::AreaKcmil => "KCMIL",
        }
    }

    /// Tags a raw value entered in this field; `None` for the gauge field.
    #[must_use]
    pub const fn measurement(self, value: Scalar) -> Option<Measurement> {
        match self {
            Self::Awg => None,
            Self::DiameterMm => Some(Measurement::Diameter(value, UnitSystem::Millimeters)),
            Self::DiameterIn => Some(Measurement::Diameter(value, UnitSystem::Inches)),
            Self::AreaMm2 => Some(Measurement::Area(value, UnitSystem::Millimeters)),
            Self::AreaIn2 => Some(Measurement::Area(value, UnitSystem::Inches)),
            Self::AreaKcmil => Some(Measurement::Kcmil(value)),
        }
    }

    fn format(self, reading: &GaugeReading, display: &DisplayConfig) -> String {
        let (value, decimals) = match self {
            Self::Awg => return format!("{} ({})", reading.awg(), self.label()),
            Self::DiameterMm => (reading.diameter_mm(), display.diameter_mm_decimals),
            Self::DiameterIn => (reading.diameter_in(), display.diameter_in_decimals),
            Self::AreaMm2 => (reading.area_mm2(), display.area_mm2_decimals),
            Self::AreaIn2 => (reading.area_in2(), display.area_in2_decimals),
            Self::AreaKcmil => (reading.area_kcmil(), display.area_kcmil_decimals),
        };
        format!("{:.*} ({})", decimals, value, self.label())
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "awg" | "gauge" => Ok(Self::Awg),
            "mm" | "diameter" => Ok(Self::DiameterMm),
            "in" | "inch" | "inch-diameter" => Ok(Self::DiameterIn),
            "mm2" | "area" => Ok(Self::AreaMm2),
            "in2" | "inch-area" => Ok(Self::AreaIn2),
            "kcmil" | "mil-area" => Ok(Self::AreaKcmil),
            other => Err(GaugeError::UnknownField(other.to_string())),
        }
    }
}

/// Result of submitting one field entry.
#[derive(Debug)]
pub enum Submission {
    /// The entry resolved to a gauge; all fields now show this reading.
    Updated(GaugeReading),
    /// The entry was empty or not a number; all fields were cleared.
    Cleared,
    /// The entry was refused; the previous reading stays on display.
    Rejected(GaugeError),
}

/// State of the interactive gauge form.
#[derive(Debug, Clone, Default)]
pub struct GaugeForm {
    reading: Option<GaugeReading>,
    error: Option<String>,
    display: DisplayConfig,
}

impl GaugeForm {
    /// Creates an empty form rendering with `display` precision.
    #[must_use]
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            reading: None,
            error: None,
            display,
        }
    }

    /// Reading currently on display, if any.
    #[must_use]
    pub const fn reading(&self) -> Option<&GaugeReading> {
        self.reading.as_ref()
    }

    /// Text of the error banner, if raised.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Precision used by [`GaugeForm::render`].
    #[must_use]
    pub const fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Applies the text typed into `field`.
    ///
    /// Text is read up to the first character that cannot continue a number,
    /// so a field still carrying its unit suffix (`"2.05 (mm φ)"`) submits
    /// `2.05`.
    pub fn submit(&mut self, field: FormField, text: &str) -> Submission {
        let Some(value) = leading_number(text).filter(|v| v.is_finite()) else {
            debug!(%field, text, "no number entered, clearing form");
            self.clear();
            return Submission::Cleared;
        };

        let awg = match field.measurement(value) {
            Some(measurement) => nearest(measurement),
            None => match Awg::try_from(value) {
                Ok(awg) => awg,
                Err(err) => {
                    warn!(%field, value, %err, "rejected gauge entry");
                    self.error = Some(err.to_string());
                    return Submission::Rejected(err);
                }
            },
        };

        let reading = compute(awg);
        debug!(%field, value, %awg, "resolved entry");
        self.error = None;
        self.reading = Some(reading);
        Submission::Updated(reading)
    }

    /// Empties every field and lowers the error banner.
    pub fn clear(&mut self) {
        self.reading = None;
        self.error = None;
    }

    /// Renders every field in display order; empty strings when cleared.
    #[must_use]
    pub fn render(&self) -> Vec<(FormField, String)> {
        FormField::ALL
            .iter()
            .map(|&field| {
                let text = self
                    .reading
                    .as_ref()
                    .map(|r| field.format(r, &self.display))
                    .unwrap_or_default();
                (field, text)
            })
            .collect()
    }
}

/// Renders one reading with the given precision, in display order.
#[must_use]
pub fn render_reading(reading: &GaugeReading, display: &DisplayConfig) -> Vec<(FormField, String)> {
    FormField::ALL
        .iter()
        .map(|&field| (field, field.format(reading, display)))
        .collect()
}

/// Parses the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent. Returns `None` when no digits precede the first other character.
#[must_use]
pub fn leading_number(text: &str) -> Option<Scalar> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn rendered(form: &GaugeForm) -> Vec<String> {
        form.render().into_iter().map(|(_, text)| text).collect()
    }

    #[test]
    fn leading_number_reads_prefix() {
        assert_eq!(leading_number("12"), Some(12.0));
        assert_eq!(leading_number("  2.05 (mm φ)"), Some(2.05));
        assert_eq!(leading_number("-3.5e2x"), Some(-350.0));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("5."), Some(5.0));
        assert_eq!(leading_number("7e"), Some(7.0));
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number("-."), None);
    }

    #[test]
    fn gauge_entry_fills_every_field() {
        let mut form = GaugeForm::default();
        let outcome = form.submit(FormField::Awg, "12");
        assert!(matches!(outcome, Submission::Updated(r) if r.awg().get() == 12));
        assert_eq!(
            rendered(&form),
            vec![
                "12 (AWG)",
                "2.0525 (mm φ)",
                "0.0808 (in φ)",
                "3.3088 (mm²)",
                "0.00513 (in²)",
                "6.5299 (KCMIL)",
            ]
        );
        assert!(form.error().is_none());
    }

    #[test]
    fn measurement_entries_resolve_to_nearest_gauge() {
        let mut form = GaugeForm::default();
        let cases = [
            (FormField::DiameterMm, "2.05"),
            (FormField::DiameterIn, "0.0808"),
            (FormField::AreaMm2, "3.3"),
            (FormField::AreaIn2, "0.00513"),
            (FormField::AreaKcmil, "6.53"),
        ];
        for (field, text) in cases {
            form.submit(field, text);
            let awg = form.reading().map(|r| r.awg().get());
            assert_eq!(awg, Some(12), "{field} {text}");
        }
    }

    #[test]
    fn field_text_with_unit_suffix_is_accepted() {
        let mut form = GaugeForm::default();
        form.submit(FormField::DiameterMm, "2.0525 (mm φ)");
        assert_eq!(form.reading().map(|r| r.awg().get()), Some(12));
    }

    #[test]
    fn out_of_range_gauge_raises_banner_and_keeps_reading() {
        let mut form = GaugeForm::default();
        form.submit(FormField::Awg, "10");
        let outcome = form.submit(FormField::Awg, "41");
        assert!(matches!(outcome, Submission::Rejected(GaugeError::OutOfRange { .. })));
        assert_eq!(form.error(), Some("value out of range [0-40]: 41"));
        assert_eq!(form.reading().map(|r| r.awg().get()), Some(10));

        form.submit(FormField::Awg, "-1");
        assert!(form.error().is_some());
    }

    #[test]
    fn fractional_gauge_is_rejected() {
        let mut form = GaugeForm::default();
        let outcome = form.submit(FormField::Awg, "12.5");
        assert!(matches!(outcome, Submission::Rejected(GaugeError::NotWholeNumber(_))));
        assert!(form.reading().is_none());
    }

    #[test]
    fn valid_entry_lowers_banner() {
        let mut form = GaugeForm::default();
        form.submit(FormField::Awg, "99");
        assert!(form.error().is_some());
        form.submit(FormField::DiameterMm, "1.0");
        assert!(form.error().is_none());
        assert_eq!(form.reading().map(|r| r.awg().get()), Some(18));
    }

    #[test]
    fn non_numeric_entry_clears_everything() {
        let mut form = GaugeForm::default();
        form.submit(FormField::Awg, "12");
        assert!(matches!(form.submit(FormField::AreaMm2, "   "), Submission::Cleared));
        assert!(form.reading().is_none());
        assert!(rendered(&form).iter().all(String::is_empty));

        form.submit(FormField::Awg, "50");
        assert!(matches!(form.submit(FormField::Awg, "abc"), Submission::Cleared));
        assert!(form.error().is_none());
    }

    #[test]
    fn negative_kcmil_entry_shows_thinnest_gauge() {
        let mut form = GaugeForm::default();
        form.submit(FormField::AreaKcmil, "-5");
        assert_eq!(form.reading().map(|r| r.awg()), Some(Awg::MAX));
        form.submit(FormField::AreaMm2, "-5");
        assert_eq!(form.reading().map(|r| r.awg()), Some(Awg::MAX));
    }

    #[test]
    fn overflowing_entry_is_treated_as_non_numeric() {
        let mut form = GaugeForm::default();
        assert!(matches!(form.submit(FormField::DiameterMm, "1e999"), Submission::Cleared));
    }

    #[test]
    fn display_config_controls_precision() {
        let display = DisplayConfig {
            diameter_mm_decimals: 2,
            ..DisplayConfig::default()
        };
        let mut form = GaugeForm::new(display);
        form.submit(FormField::Awg, "12");
        assert_eq!(form.render()[1].1, "2.05 (mm φ)");
        assert_eq!(form.display().diameter_mm_decimals, 2);
    }

    #[test]
    fn render_reading_matches_form_render() {
        let mut form = GaugeForm::default();
        let Submission::Updated(reading) = form.submit(FormField::Awg, "0") else {
            panic!("expected an update");
        };
        assert_eq!(render_reading(&reading, form.display()), form.render());
        assert_relative_eq!(reading.diameter_mm(), 8.2515, epsilon = 1.0e-4);
    }

    #[test]
    fn field_names_parse_with_aliases() {
        assert_eq!("AWG".parse::<FormField>().unwrap(), FormField::Awg);
        assert_eq!("diameter".parse::<FormField>().unwrap(), FormField::DiameterMm);
        assert_eq!("inch-area".parse::<FormField>().unwrap(), FormField::AreaIn2);
        assert_eq!("mil-area".parse::<FormField>().unwrap(), FormField::AreaKcmil);
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
        assert!(matches!("ohms".parse::<FormField>(), Err(GaugeError::UnknownField(_))));
    }
}
