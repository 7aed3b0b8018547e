//! The draggable handle of a slider.

use crate::geometry::{fmt_num, polar_to_cartesian};
use kurbo::Point;

/// A handle on a slider ring, kept in both polar and cartesian form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Angle in degrees, clockwise from up.
    pub angle: f64,
    /// Distance from the ring center.
    pub radius: f64,
    /// Position relative to the canvas origin.
    pub position: Point,
    /// Radius of the drawn circle.
    pub size: f64,
}

impl Handle {
    /// Create a handle at `angle` on a ring centered at `center`.
    pub fn new(center: Point, radius: f64, angle: f64, size: f64) -> Self {
        Self {
            angle,
            radius,
            position: polar_to_cartesian(center, radius, angle),
            size,
        }
    }

    /// Move the handle to `angle`, keeping its radius.
    pub fn rotate_to(&mut self, center: Point, angle: f64) {
        self.angle = angle;
        self.position = polar_to_cartesian(center, self.radius, angle);
    }

    /// SVG `transform` placing the handle.
    pub fn transform(&self) -> String {
        format!(
            "translate({} {})",
            fmt_num(self.position.x),
            fmt_num(self.position.y)
        )
    }

    /// Check if `point` falls on the handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = self.size + tolerance;
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= reach * reach
    }
}
