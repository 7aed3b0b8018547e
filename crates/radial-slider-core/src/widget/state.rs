//! Drag state of a single slider.

/// Whether a slider follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Not following the pointer; only jump-to-location updates apply.
    #[default]
    Idle,
    /// The handle was grabbed and follows every pointer move until release.
    Rotating,
}

impl DragState {
    /// Check if the slider is being dragged.
    pub fn is_rotating(self) -> bool {
        self == Self::Rotating
    }
}
