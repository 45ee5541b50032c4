use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MARKER_COUNT, DEFAULT_MARKER_SCALE, DEFAULT_SPREAD_RADIUS, MAX_MARKER_SCALE,
    MAX_SPREAD_RADIUS,
};
use crate::error::{Result, VizError};

/// RGB color with components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert a 0xRRGGBB literal into component form.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

/// Default palette for the three term slots (falling, pulsing, floating).
pub const SLOT_COLORS: [Rgb; 3] = [
    Rgb::new(0.9, 0.3, 0.3),
    Rgb::new(0.3, 0.9, 0.4),
    Rgb::new(0.3, 0.5, 0.9),
];

/// Placement configuration for one search term. Three instances exist
/// concurrently, one per visual category slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TermConfig {
    pub term: String,
    pub color: Rgb,
    pub spread_radius: f32,
    pub marker_count: usize,
    pub randomize_rotation: bool,
    pub scale: f32,
}

impl TermConfig {
    pub fn new(term: &str, color: Rgb) -> Self {
        Self {
            term: term.to_string(),
            color,
            spread_radius: DEFAULT_SPREAD_RADIUS,
            marker_count: DEFAULT_MARKER_COUNT,
            randomize_rotation: true,
            scale: DEFAULT_MARKER_SCALE,
        }
    }

    /// Reject configs that would otherwise flow NaN or negative values into
    /// marker geometry. Zero spread is legal (all markers on the axis).
    pub fn validate(&self) -> Result<()> {
        if self.term.trim().is_empty() {
            return Err(VizError::MalformedConfig("term is empty".to_string()));
        }
        if !self.spread_radius.is_finite() || self.spread_radius < 0.0 {
            return Err(VizError::MalformedConfig(format!(
                "spread_radius must be finite and non-negative, got {}",
                self.spread_radius
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(VizError::MalformedConfig(format!(
                "scale must be finite and positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Spread radius saturated at the documented maximum.
    pub fn clamped_spread(&self) -> f32 {
        self.spread_radius.min(MAX_SPREAD_RADIUS)
    }

    /// Scale saturated at the documented maximum.
    pub fn clamped_scale(&self) -> f32 {
        self.scale.min(MAX_MARKER_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgb::from_hex(0xff8000);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert!(c.b.abs() < 1e-6);
    }

    #[test]
    fn test_defaults_are_valid() {
        for color in SLOT_COLORS {
            assert!(TermConfig::new("word", color).validate().is_ok());
        }
    }

    #[test]
    fn test_empty_term_rejected() {
        let config = TermConfig::new("  ", SLOT_COLORS[0]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("term is empty"));
    }

    #[test]
    fn test_nan_spread_rejected() {
        let mut config = TermConfig::new("word", SLOT_COLORS[0]);
        config.spread_radius = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_spread_rejected() {
        let mut config = TermConfig::new("word", SLOT_COLORS[0]);
        config.spread_radius = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_spread_allowed() {
        let mut config = TermConfig::new("word", SLOT_COLORS[0]);
        config.spread_radius = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut config = TermConfig::new("word", SLOT_COLORS[0]);
        config.scale = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_degenerate_values_clamped() {
        let mut config = TermConfig::new("word", SLOT_COLORS[0]);
        config.spread_radius = f32::MAX;
        config.scale = f32::MAX;
        assert_eq!(config.clamped_spread(), MAX_SPREAD_RADIUS);
        assert_eq!(config.clamped_scale(), MAX_MARKER_SCALE);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = TermConfig::new("cat", SLOT_COLORS[1]);
        let json = serde_json::to_string(&config).unwrap();
        let config2: TermConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.term, config2.term);
        assert_eq!(config.color, config2.color);
    }
}
