//! Circular geometry for slider rings and handles.
//!
//! Angles are in degrees, measured clockwise from "up" in screen
//! coordinates (y grows downward).

use kurbo::{Arc, BezPath, Point, Shape, SvgArc, Vec2};

/// Sweep used for rings that should look closed without collapsing to a point.
pub const FULL_SWEEP: f64 = 359.9;

/// Sweep of an active arc before the first update.
pub const MIN_SWEEP: f64 = 0.1;

/// Sides shorter than this are treated as zero-length.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Angle at vertex `b` subtended by `a` and `c`, in degrees within `[0, 360)`.
///
/// The interior angle comes from the law of cosines. When `a` lies to the
/// right of (or level with) `c` the angle is mirrored to `360 - angle`, so a
/// pointer travelling clockwise from `a` around `b` yields increasing values.
///
/// Returns `None` when `a == b` or `b == c`.
pub fn angle_between(a: Point, b: Point, c: Point) -> Option<f64> {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ac = a.distance(c);
    if ab < DEGENERATE_EPSILON || bc < DEGENERATE_EPSILON {
        return None;
    }

    let cos = ((ab * ab + bc * bc - ac * ac) / (2.0 * ab * bc)).clamp(-1.0, 1.0);
    let interior = cos.acos().to_degrees();

    let angle = if a.x < c.x { interior } else { 360.0 - interior };
    // A mirrored zero lands exactly on 360
    if angle >= 360.0 { Some(0.0) } else { Some(angle) }
}

/// Point at `degrees` on a circle, with 0° pointing up.
pub fn polar_to_cartesian(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = (degrees - 90.0).to_radians();
    center + Vec2::new(radius * radians.cos(), radius * radians.sin())
}

/// Radius of a slider's ring given its outer diameter and stroke width.
pub fn ring_radius(size: f64, width: f64) -> f64 {
    size / 2.0 - width / 2.0 - 2.0
}

/// An open circular arc, drawn from its end angle back to its start angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    /// Where the path begins (the point at the end angle).
    pub from: Point,
    /// Where the path ends (the point at the start angle).
    pub to: Point,
    pub radius: f64,
    /// Whether the arc spans more than half the circle.
    pub large_arc: bool,
}

impl ArcPath {
    /// SVG path data (`M x y A r r 0 large 0 x y`).
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} A {} {} 0 {} 0 {} {}",
            fmt_num(self.from.x),
            fmt_num(self.from.y),
            fmt_num(self.radius),
            fmt_num(self.radius),
            u8::from(self.large_arc),
            fmt_num(self.to.x),
            fmt_num(self.to.y),
        )
    }

    /// The same arc as an SVG elliptical arc segment.
    pub fn to_svg_arc(&self) -> SvgArc {
        SvgArc {
            from: self.from,
            to: self.to,
            radii: Vec2::new(self.radius, self.radius),
            x_rotation: 0.0,
            large_arc: self.large_arc,
            sweep: false,
        }
    }

    /// Flatten the arc into cubic Béziers.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let svg_arc = self.to_svg_arc();
        match Arc::from_svg_arc(&svg_arc) {
            Some(arc) => arc.to_path(tolerance),
            None => {
                let mut path = BezPath::new();
                path.move_to(self.from);
                path.line_to(self.to);
                path
            }
        }
    }
}

/// Describe the arc between `start_deg` and `end_deg` on a circle.
///
/// The endpoints are reversed: the path starts at `end_deg` and sweeps
/// counter-clockwise back to `start_deg`.
pub fn describe_arc(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> ArcPath {
    ArcPath {
        from: polar_to_cartesian(center, radius, end_deg),
        to: polar_to_cartesian(center, radius, start_deg),
        radius,
        large_arc: end_deg - start_deg > 180.0,
    }
}

/// Value represented by `angle` on a `[min, max]` dial.
pub fn value_at(angle: f64, min: f64, max: f64) -> f64 {
    min + angle / 360.0 * (max - min)
}

/// Angle representing `value` on a `[min, max]` dial.
pub fn angle_for_value(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min) * 360.0
}

/// Format a coordinate for markup: four decimals, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn test_polar_zero_points_up() {
        let center = Point::new(50.0, 50.0);
        let p = polar_to_cartesian(center, 20.0, 0.0);
        assert!(close(p, Point::new(50.0, 30.0)));
    }

    #[test]
    fn test_polar_quarter_turns() {
        let center = Point::new(0.0, 0.0);
        assert!(close(polar_to_cartesian(center, 10.0, 90.0), Point::new(10.0, 0.0)));
        assert!(close(polar_to_cartesian(center, 10.0, 180.0), Point::new(0.0, 10.0)));
        assert!(close(polar_to_cartesian(center, 10.0, 270.0), Point::new(-10.0, 0.0)));
    }

    #[test]
    fn test_polar_full_turn_matches_zero() {
        let center = Point::new(12.0, -4.0);
        let zero = polar_to_cartesian(center, 7.5, 0.0);
        let full = polar_to_cartesian(center, 7.5, 360.0);
        assert!(close(zero, full));
    }

    #[test]
    fn test_angle_between_clockwise() {
        let center = Point::new(0.0, 0.0);
        let top = Point::new(0.0, -10.0);
        let right = Point::new(10.0, 0.0);
        let bottom = Point::new(0.0, 10.0);
        let left = Point::new(-10.0, 0.0);

        assert!((angle_between(top, center, right).unwrap() - 90.0).abs() < EPS);
        assert!((angle_between(top, center, bottom).unwrap() - 180.0).abs() < EPS);
        assert!((angle_between(top, center, left).unwrap() - 270.0).abs() < EPS);
    }

    #[test]
    fn test_angle_between_straight_up_is_zero() {
        let center = Point::new(0.0, 0.0);
        let top = Point::new(0.0, -10.0);
        let angle = angle_between(top, center, Point::new(0.0, -25.0)).unwrap();
        assert!(angle.abs() < EPS);
    }

    #[test]
    fn test_angle_between_degenerate() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(angle_between(p, p, Point::new(1.0, 1.0)), None);
        assert_eq!(angle_between(Point::new(1.0, 1.0), p, p), None);
    }

    #[test]
    fn test_describe_arc_small_sweep() {
        let arc = describe_arc(Point::new(50.0, 50.0), 40.0, 0.0, 90.0);
        assert!(!arc.large_arc);
        assert!(close(arc.from, Point::new(90.0, 50.0)));
        assert!(close(arc.to, Point::new(50.0, 10.0)));
        assert_eq!(arc.to_svg_path(), "M 90 50 A 40 40 0 0 0 50 10");
    }

    #[test]
    fn test_describe_arc_large_sweep() {
        let arc = describe_arc(Point::new(50.0, 50.0), 40.0, 0.0, 270.0);
        assert!(arc.large_arc);
        assert_eq!(arc.to_svg_path(), "M 10 50 A 40 40 0 1 0 50 10");
    }

    #[test]
    fn test_arc_bez_path_endpoints() {
        let arc = describe_arc(Point::new(0.0, 0.0), 10.0, 0.0, 180.0);
        let path = arc.to_bez_path(0.1);
        let bounds = path.bounding_box();
        // Counter-clockwise on screen from the bottom back to the top passes the right side
        assert!(bounds.x1 > 9.9);
        assert!(bounds.x0 > -0.5);
    }

    #[test]
    fn test_value_mapping() {
        assert_eq!(value_at(0.0, 100.0, 200.0), 100.0);
        assert_eq!(value_at(360.0, 100.0, 200.0), 200.0);
        assert!((value_at(90.0, 0.0, 100.0) - 25.0).abs() < EPS);
        assert!((angle_for_value(150.0, 100.0, 200.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(50.0), "50");
        assert_eq!(fmt_num(12.345678), "12.3457");
        assert_eq!(fmt_num(-0.00001), "0");
        assert_eq!(fmt_num(6.123e-15), "0");
    }

    #[test]
    fn test_ring_radius() {
        assert_eq!(ring_radius(100.0, 10.0), 43.0);
    }

    proptest! {
        #[test]
        fn prop_value_round_trip(value in -1000.0f64..1000.0, min in -500.0f64..0.0, span in 1.0f64..500.0) {
            let max = min + span;
            let angle = angle_for_value(value, min, max);
            let back = value_at(angle, min, max);
            prop_assert!((back - value).abs() < 1e-6);
        }

        #[test]
        fn prop_angle_between_recovers_polar_angle(degrees in 0.5f64..359.5, radius in 1.0f64..200.0) {
            let center = Point::new(100.0, 100.0);
            let top = polar_to_cartesian(center, radius, 0.0);
            let pointer = polar_to_cartesian(center, radius * 1.5, degrees);
            let angle = angle_between(top, center, pointer).unwrap();
            prop_assert!((angle - degrees).abs() < 1e-4);
        }

        #[test]
        fn prop_angle_between_in_range(x in -500.0f64..500.0, y in -500.0f64..500.0) {
            let center = Point::new(0.0, 0.0);
            let top = Point::new(0.0, -40.0);
            if let Some(angle) = angle_between(top, center, Point::new(x, y)) {
                prop_assert!((0.0..360.0).contains(&angle));
            }
        }
    }
}
