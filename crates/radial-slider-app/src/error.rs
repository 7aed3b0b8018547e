//! Application errors.

use radial_slider_core::{ConfigError, WidgetError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Widget(#[from] WidgetError),
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid slider configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Container '{0}' not found")]
    ContainerNotFound(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Invalid assignment '{0}': expected SLIDER=VALUE")]
    InvalidAssignment(String),
    #[error("No slider named '{0}'")]
    UnknownName(String),
}

pub type AppResult<T> = Result<T, AppError>;
