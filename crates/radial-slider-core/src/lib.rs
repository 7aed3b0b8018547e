//! Radial Slider Core Library
//!
//! Platform-agnostic geometry, state and scene description for circular
//! drag-to-set sliders. Nothing here touches a page: scenes are returned as
//! [`tree::Element`] descriptions and updates as [`widget::SliderPatch`]es.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod labels;
pub mod snap;
pub mod tree;
pub mod widget;

pub use color::SliderColor;
pub use config::{SliderConfig, normalize, slugify};
pub use error::{ConfigError, WidgetError, WidgetResult};
pub use geometry::{ArcPath, angle_between, describe_arc, polar_to_cartesian};
pub use input::{EventTarget, PointerSource, SliderEvent};
pub use labels::{LabelField, LabelOptions, LabelPanel};
pub use snap::snap_to_step;
pub use tree::{Built, Element, Node, TreeBuilder, build, ce};
pub use widget::{DragState, Handle, NodeChange, RadialSliderWidget, Slider, SliderPart, SliderPatch};
