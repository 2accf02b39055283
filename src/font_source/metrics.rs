//! Font metrics and measurement data
//!
//! Vertical metrics used to size specimen rows and to report what was
//! loaded. Missing values fall back to conventional fractions of the em.

use norad::Font;

/// Font metrics for spacing and positioning
#[derive(Clone, Debug, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    pub x_height: Option<f64>,
    pub cap_height: Option<f64>,
    pub line_height: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::from_units_per_em(1000.0)
    }
}

impl FontMetrics {
    /// Metrics derived from the em size alone
    pub fn from_units_per_em(units_per_em: f64) -> Self {
        let ascender = units_per_em * 0.8; // 80% of UPM
        let descender = -(units_per_em * 0.2); // -20% of UPM
        Self {
            units_per_em,
            ascender,
            descender,
            x_height: None,
            cap_height: None,
            line_height: ascender - descender,
        }
    }

    /// Extract metrics from a UFO
    pub fn from_ufo(ufo: &Font) -> Self {
        let font_info = &ufo.font_info;

        let units_per_em = font_info
            .units_per_em
            .map(|v| v.to_string().parse().unwrap_or(1000.0))
            .unwrap_or(1000.0);
        let defaults = Self::from_units_per_em(units_per_em);

        // Load metrics from UFO, using reasonable defaults based on units_per_em if missing
        let ascender = font_info.ascender.unwrap_or(defaults.ascender);
        let descender = font_info.descender.unwrap_or(defaults.descender);

        Self {
            units_per_em,
            ascender,
            descender,
            x_height: font_info.x_height,
            cap_height: font_info.cap_height,
            line_height: ascender - descender,
        }
    }
}
