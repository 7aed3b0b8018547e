//! Radial Slider Application
//!
//! Shell around the core widget: binds it to the browser DOM on WASM and
//! exports static drawings on native targets.

mod error;
pub mod export;

pub use error::{AppError, AppResult};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::RadialSlider;
