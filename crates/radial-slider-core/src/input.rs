//! Pointer and touch input routed to sliders.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Where a pointer reading came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerSource {
    /// A mouse at this client position.
    Mouse(Point),
    /// Active touch points in client coordinates; the first one is used.
    Touch(Vec<Point>),
}

impl PointerSource {
    /// The pointer position, if there is one.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerSource::Mouse(position) => Some(*position),
            PointerSource::Touch(touches) => touches.first().copied(),
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, PointerSource::Touch(_))
    }
}

/// The element an event was dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTarget {
    /// The handle of the slider at this index.
    Handle(usize),
    /// The ring group of the slider at this index.
    Body(usize),
    /// The page as a whole.
    Document,
}

impl EventTarget {
    /// Index of the slider targeted, if any.
    pub fn slider(self) -> Option<usize> {
        match self {
            EventTarget::Handle(index) | EventTarget::Body(index) => Some(index),
            EventTarget::Document => None,
        }
    }
}

/// An input event delivered to a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    /// Mouse button pressed or touch started.
    Down {
        target: EventTarget,
        source: PointerSource,
    },
    /// Mouse or touch moved.
    Move {
        target: EventTarget,
        source: PointerSource,
    },
    /// Mouse button released or touch ended.
    Up,
}

impl SliderEvent {
    pub fn mouse_down(target: EventTarget, position: Point) -> Self {
        SliderEvent::Down {
            target,
            source: PointerSource::Mouse(position),
        }
    }

    pub fn mouse_move(target: EventTarget, position: Point) -> Self {
        SliderEvent::Move {
            target,
            source: PointerSource::Mouse(position),
        }
    }

    pub fn touch_move(target: EventTarget, touches: Vec<Point>) -> Self {
        SliderEvent::Move {
            target,
            source: PointerSource::Touch(touches),
        }
    }

    pub fn touch_down(target: EventTarget, touches: Vec<Point>) -> Self {
        SliderEvent::Down {
            target,
            source: PointerSource::Touch(touches),
        }
    }

    /// Whether this event grabs a handle. The page should not treat it as
    /// the start of a selection or a scroll.
    pub fn is_grab(&self) -> bool {
        matches!(
            self,
            SliderEvent::Down {
                target: EventTarget::Handle(_),
                ..
            }
        )
    }

    /// Pointer position carried by the event.
    pub fn position(&self) -> Option<Point> {
        match self {
            SliderEvent::Down { source, .. } | SliderEvent::Move { source, .. } => source.position(),
            SliderEvent::Up => None,
        }
    }
}
