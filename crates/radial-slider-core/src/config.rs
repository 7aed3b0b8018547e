//! Slider configuration: defaults, validation and normalization.

use crate::color::SliderColor;
use crate::error::ConfigError;
use crate::geometry::ring_radius;
use crate::snap::divides_evenly;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "slider";
pub const DEFAULT_SIZE: f64 = 100.0;
pub const DEFAULT_WIDTH: f64 = 10.0;
pub const DEFAULT_DASH: f64 = 6.0;
pub const DEFAULT_GAP: f64 = 2.0;
pub const DEFAULT_MIN_VALUE: f64 = 100.0;
pub const DEFAULT_MAX_VALUE: f64 = 200.0;
pub const DEFAULT_STEP: f64 = 0.0;

/// Configuration of a single radial slider.
///
/// Any field missing from the serialized form takes its documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Display name; also the source of the slider's CSS class.
    pub name: String,
    /// Outer diameter.
    pub size: f64,
    /// Stroke width of the ring.
    pub width: f64,
    /// Length of each dash along the ring.
    pub dash: f64,
    /// Length of each gap between dashes.
    pub gap: f64,
    /// Accepted for compatibility; not used for drawing.
    pub rotate: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Value quantization, 0 for a continuous dial.
    pub step: f64,
    /// Color shown between active dashes.
    pub gap_color: SliderColor,
    /// Active arc color.
    pub color: SliderColor,
    /// Color shown between track dashes.
    pub bg_gap_color: SliderColor,
    /// Track color.
    pub bg_color: SliderColor,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            size: DEFAULT_SIZE,
            width: DEFAULT_WIDTH,
            dash: DEFAULT_DASH,
            gap: DEFAULT_GAP,
            rotate: 0.0,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            step: DEFAULT_STEP,
            gap_color: SliderColor::from_rgb8(0xff, 0xff, 0xff),
            color: SliderColor::from_rgb8(0x2a, 0x9f, 0xd6),
            bg_gap_color: SliderColor::from_rgb8(0xff, 0xff, 0xff),
            bg_color: SliderColor::from_rgb8(0xd8, 0xdd, 0xe3),
        }
    }
}

impl SliderConfig {
    /// Create a config with the given name and all other fields defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_color(mut self, color: SliderColor) -> Self {
        self.color = color;
        self
    }

    /// CSS class derived from the name.
    pub fn class(&self) -> String {
        slugify(&self.name)
    }

    /// Radius of the ring's center line.
    pub fn radius(&self) -> f64 {
        ring_radius(self.size, self.width)
    }

    /// Check that the config can be drawn and driven.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("size", self.size),
            ("width", self.width),
            ("dash", self.dash),
            ("gap", self.gap),
            ("rotate", self.rotate),
            ("min_value", self.min_value),
            ("max_value", self.max_value),
            ("step", self.step),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite {
                name: self.name.clone(),
                field,
            });
        }

        for (field, value) in [("size", self.size), ("width", self.width)] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        for (field, value) in [("dash", self.dash), ("gap", self.gap), ("step", self.step)] {
            if value < 0.0 {
                return Err(ConfigError::Negative {
                    name: self.name.clone(),
                    field,
                });
            }
        }

        if self.radius() <= 0.0 {
            return Err(ConfigError::DegenerateRadius {
                name: self.name.clone(),
                size: self.size,
                width: self.width,
            });
        }
        if self.min_value >= self.max_value {
            return Err(ConfigError::EmptyRange {
                name: self.name.clone(),
                min: self.min_value,
                max: self.max_value,
            });
        }
        if !divides_evenly(self.min_value, self.max_value, self.step) {
            return Err(ConfigError::UnevenStep {
                name: self.name.clone(),
                step: self.step,
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

/// Validate every config and order them largest first.
///
/// The sort is stable, so sliders of equal size keep their given order.
pub fn normalize(mut configs: Vec<SliderConfig>) -> Result<Vec<SliderConfig>, ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::Empty);
    }
    for config in &configs {
        config.validate()?;
    }
    configs.sort_by(|a, b| b.size.total_cmp(&a.size));
    Ok(configs)
}

/// Parse a JSON array of slider configs.
pub fn from_json(json: &str) -> Result<Vec<SliderConfig>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Lowercase the name and collapse every run of other characters into `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        slug
    }
}
