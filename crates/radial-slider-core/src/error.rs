//! Error types for slider configuration and widget operations.

use thiserror::Error;

/// Errors raised while normalizing slider configurations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("At least one slider configuration is required")]
    Empty,
    #[error("Slider '{name}': {field} must be a finite number")]
    NonFinite { name: String, field: &'static str },
    #[error("Slider '{name}': {field} must be greater than zero (got {value})")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("Slider '{name}': {field} must not be negative")]
    Negative { name: String, field: &'static str },
    #[error("Slider '{name}': stroke width {width} leaves no room for an arc of size {size}")]
    DegenerateRadius { name: String, size: f64, width: f64 },
    #[error("Slider '{name}': min_value {min} must be less than max_value {max}")]
    EmptyRange { name: String, min: f64, max: f64 },
    #[error("Slider '{name}': step {step} does not evenly divide the range {min}..{max}")]
    UnevenStep {
        name: String,
        step: f64,
        min: f64,
        max: f64,
    },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Errors raised by widget operations after construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No slider at index {0}")]
    UnknownSlider(usize),
    #[error("Slider value must be a finite number")]
    NonFiniteValue,
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
