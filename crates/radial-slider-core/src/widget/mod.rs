//! Slider widgets and their interaction state.
//!
//! A [`RadialSliderWidget`] owns every [`Slider`] drawn in one container.
//! Input arrives as [`SliderEvent`](crate::input::SliderEvent)s; each update
//! is returned as a [`SliderPatch`] listing the node changes to apply, so the
//! widget never touches the page itself.

mod handles;
mod manager;
mod slider;
mod state;

pub use handles::Handle;
pub use manager::RadialSliderWidget;
pub use slider::{NodeChange, Slider, SliderPart, SliderPatch};
pub use state::DragState;
