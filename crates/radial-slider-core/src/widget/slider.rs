//! A single radial slider: geometry, drag state and scene description.

use super::handles::Handle;
use super::state::DragState;
use crate::config::SliderConfig;
use crate::geometry::{
    FULL_SWEEP, MIN_SWEEP, angle_between, angle_for_value, describe_arc, fmt_num, value_at,
};
use crate::snap::snap_to_step;
use crate::tree::Element;
use kurbo::{Point, Vec2};

/// Distance the pointer may stray from the ring and still hit it.
const RING_HIT_TOLERANCE: f64 = 2.0;

/// The drawn parts of a slider, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderPart {
    /// The `<g>` holding everything else.
    Group,
    TrackGap,
    Track,
    ActiveGap,
    Active,
    Handle,
}

impl SliderPart {
    fn suffix(self) -> &'static str {
        match self {
            SliderPart::Group => "group",
            SliderPart::TrackGap => "track-gap",
            SliderPart::Track => "track",
            SliderPart::ActiveGap => "active-gap",
            SliderPart::Active => "active",
            SliderPart::Handle => "handle",
        }
    }

    /// Key of this part's node for the slider at `index`.
    pub fn key(self, index: usize) -> String {
        format!("slider-{index}-{}", self.suffix())
    }
}

/// A change to apply to a realized node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    Attribute {
        key: String,
        name: &'static str,
        value: String,
    },
    Text { key: String, text: String },
}

/// Everything that changed after a slider moved.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPatch {
    pub index: usize,
    pub angle: f64,
    pub value: f64,
    pub changes: Vec<NodeChange>,
}

/// A radial slider instance.
#[derive(Debug, Clone)]
pub struct Slider {
    config: SliderConfig,
    class: String,
    /// Ring center on the shared canvas.
    center: Point,
    handle: Handle,
    state: DragState,
    /// Last pointer position in client coordinates.
    last_pointer: Option<Point>,
    /// Ring center in client coordinates, refreshed on every event.
    screen_center: Option<Point>,
}

impl Slider {
    /// Create a slider at value `min_value` on a canvas of `canvas_size`.
    ///
    /// The config is expected to have been validated.
    pub fn new(config: SliderConfig, canvas_size: f64) -> Self {
        let center = Point::new(canvas_size / 2.0, canvas_size / 2.0);
        let handle = Handle::new(center, config.radius(), 0.0, config.width / 2.0);
        Self {
            class: config.class(),
            config,
            center,
            handle,
            state: DragState::Idle,
            last_pointer: None,
            screen_center: None,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// CSS class derived from the name.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_rotating(&self) -> bool {
        self.state.is_rotating()
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    /// Ring center in client coordinates as of the last event.
    pub fn screen_center(&self) -> Option<Point> {
        self.screen_center
    }

    /// Current (snapped) angle in degrees.
    pub fn angle(&self) -> f64 {
        self.handle.angle
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        value_at(self.handle.angle, self.config.min_value, self.config.max_value)
    }

    /// Grab the handle.
    pub fn begin_rotation(&mut self, screen_center: Point) {
        self.screen_center = Some(screen_center);
        self.state = DragState::Rotating;
    }

    /// Release the handle.
    pub fn end_rotation(&mut self) {
        self.state = DragState::Idle;
    }

    /// Move the handle under `pointer`.
    ///
    /// Returns `None` when the pointer sits on the ring center, where no
    /// angle can be measured.
    pub fn update_from_pointer(
        &mut self,
        index: usize,
        pointer: Point,
        screen_center: Point,
    ) -> Option<SliderPatch> {
        self.screen_center = Some(screen_center);
        self.last_pointer = Some(pointer);

        let reference = screen_center - Vec2::new(0.0, self.handle.radius);
        let Some(raw) = angle_between(reference, screen_center, pointer) else {
            log::warn!(
                "Slider '{}': pointer {:?} on the ring center, ignoring",
                self.config.name,
                pointer
            );
            return None;
        };
        Some(self.rotate_to(index, raw))
    }

    /// Set the value directly; it is clamped to the range and snapped.
    pub fn set_value(&mut self, index: usize, value: f64) -> SliderPatch {
        let (min_value, max_value) = (self.config.min_value, self.config.max_value);
        let value = value.clamp(min_value, max_value);
        self.rotate_to(index, angle_for_value(value, min_value, max_value))
    }

    fn rotate_to(&mut self, index: usize, raw_angle: f64) -> SliderPatch {
        let config = &self.config;
        let angle = snap_to_step(raw_angle, config.min_value, config.max_value, config.step)
            .clamp(0.0, 360.0);
        self.handle.rotate_to(self.center, angle);

        let value = self.value();
        log::trace!(
            "Slider '{}': raw {:.2}° snapped {:.2}° value {:.2}",
            config.name,
            raw_angle,
            angle,
            value
        );

        let active_path = self.active_path();
        let changes = vec![
            NodeChange::Attribute {
                key: SliderPart::Handle.key(index),
                name: "transform",
                value: self.handle.transform(),
            },
            NodeChange::Attribute {
                key: SliderPart::ActiveGap.key(index),
                name: "d",
                value: active_path.clone(),
            },
            NodeChange::Attribute {
                key: SliderPart::Active.key(index),
                name: "d",
                value: active_path,
            },
        ];
        SliderPatch {
            index,
            angle,
            value,
            changes,
        }
    }

    /// Sweep drawn for the active arc.
    ///
    /// Kept within [0.1°, 359.9°]: closer to either end the arc endpoints
    /// coincide once formatted and the arc is not drawn.
    pub fn sweep(&self) -> f64 {
        self.handle.angle.clamp(MIN_SWEEP, FULL_SWEEP)
    }

    fn active_path(&self) -> String {
        describe_arc(self.center, self.handle.radius, 0.0, self.sweep()).to_svg_path()
    }

    fn dash_array(&self) -> Option<String> {
        if self.config.dash > 0.0 && self.config.gap > 0.0 {
            Some(format!(
                "{} {}",
                fmt_num(self.config.dash),
                fmt_num(self.config.gap)
            ))
        } else {
            None
        }
    }

    fn arc_element(
        &self,
        index: usize,
        part: SliderPart,
        sweep: f64,
        color: String,
        dashed: bool,
    ) -> Element {
        let d = describe_arc(self.center, self.handle.radius, 0.0, sweep).to_svg_path();
        let mut path = Element::new("path")
            .attr("class", format!("{}-{}", self.class, part.suffix()))
            .attr("d", d)
            .attr("fill", "none")
            .attr("stroke", color)
            .attr("stroke-width", fmt_num(self.config.width))
            .keyed(part.key(index));
        if dashed {
            if let Some(dash_array) = self.dash_array() {
                path.set_attr("stroke-dasharray", dash_array);
            }
        }
        path
    }

    /// Describe this slider's ring group: tracks, active arcs and handle.
    pub fn scene(&self, index: usize) -> Element {
        let config = &self.config;
        let sweep = self.sweep();
        let handle = Element::new("circle")
            .attr("class", format!("{}-handle", self.class))
            .attr("cx", "0")
            .attr("cy", "0")
            .attr("r", fmt_num(self.handle.size))
            .attr("fill", config.color.to_css())
            .attr("stroke", config.gap_color.to_css())
            .attr("stroke-width", "1")
            .attr("transform", self.handle.transform())
            .attr("style", "cursor: pointer")
            .keyed(SliderPart::Handle.key(index));

        Element::new("g")
            .attr("class", format!("radial-slider {}", self.class))
            .keyed(SliderPart::Group.key(index))
            .child(self.arc_element(
                index,
                SliderPart::TrackGap,
                FULL_SWEEP,
                config.bg_gap_color.to_css(),
                false,
            ))
            .child(self.arc_element(
                index,
                SliderPart::Track,
                FULL_SWEEP,
                config.bg_color.to_css(),
                true,
            ))
            .child(self.arc_element(
                index,
                SliderPart::ActiveGap,
                sweep,
                config.gap_color.to_css(),
                false,
            ))
            .child(self.arc_element(index, SliderPart::Active, sweep, config.color.to_css(), true))
            .child(handle)
    }

    /// Check if a canvas-local point lies on the handle.
    pub fn hit_handle(&self, point: Point) -> bool {
        self.handle.hit_test(point, RING_HIT_TOLERANCE)
    }

    /// Check if a canvas-local point lies on the ring stroke.
    pub fn hit_ring(&self, point: Point) -> bool {
        let distance = point.distance(self.center);
        let half = self.config.width / 2.0 + RING_HIT_TOLERANCE;
        (distance - self.handle.radius).abs() <= half
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polar_to_cartesian;

    fn slider(config: SliderConfig) -> Slider {
        let size = config.size;
        Slider::new(config, size)
    }

    fn pointer_at(center: Point, degrees: f64) -> Point {
        polar_to_cartesian(center, 30.0, degrees)
    }

    #[test]
    fn test_starts_at_min() {
        let s = slider(SliderConfig::new("a"));
        assert_eq!(s.angle(), 0.0);
        assert_eq!(s.value(), 100.0);
        assert_eq!(s.state(), DragState::Idle);
        assert_eq!(s.sweep(), MIN_SWEEP);
    }

    #[test]
    fn test_update_snaps_to_step() {
        let mut s = slider(SliderConfig::new("a").with_range(0.0, 100.0).with_step(10.0));
        let center = Point::new(300.0, 200.0);
        let patch = s.update_from_pointer(0, pointer_at(center, 45.0), center).unwrap();
        assert!((patch.angle - 36.0).abs() < 1e-9);
        assert!((patch.value - 10.0).abs() < 1e-9);
        assert!((s.value() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_continuous() {
        let mut s = slider(SliderConfig::new("a").with_range(0.0, 360.0));
        let center = Point::new(50.0, 50.0);
        let patch = s.update_from_pointer(0, pointer_at(center, 123.0), center).unwrap();
        assert!((patch.value - 123.0).abs() < 1e-6);
    }

    #[test]
    fn test_update_at_center_is_ignored() {
        let mut s = slider(SliderConfig::new("a"));
        let center = Point::new(50.0, 50.0);
        assert!(s.update_from_pointer(0, center, center).is_none());
        assert_eq!(s.angle(), 0.0);
    }

    #[test]
    fn test_patch_targets_keyed_nodes() {
        let mut s = slider(SliderConfig::new("a"));
        let center = Point::new(50.0, 50.0);
        let patch = s.update_from_pointer(3, pointer_at(center, 90.0), center).unwrap();

        let keys: Vec<_> = patch
            .changes
            .iter()
            .map(|change| match change {
                NodeChange::Attribute { key, name, .. } => format!("{key}:{name}"),
                NodeChange::Text { key, .. } => key.clone(),
            })
            .collect();
        assert_eq!(
            keys,
            [
                "slider-3-handle:transform",
                "slider-3-active-gap:d",
                "slider-3-active:d"
            ]
        );
        assert_eq!(
            patch.changes[0],
            NodeChange::Attribute {
                key: "slider-3-handle".into(),
                name: "transform",
                value: "translate(93 50)".into(),
            }
        );
    }

    #[test]
    fn test_full_turn_drawn_short() {
        let mut s = slider(SliderConfig::new("a").with_range(0.0, 100.0).with_step(10.0));
        let center = Point::new(50.0, 50.0);
        let patch = s.update_from_pointer(0, pointer_at(center, 355.0), center).unwrap();
        assert_eq!(patch.angle, 360.0);
        assert_eq!(patch.value, 100.0);
        assert_eq!(s.sweep(), FULL_SWEEP);
    }

    #[test]
    fn test_arc_visible_just_below_max() {
        let mut s = slider(SliderConfig::new("a"));
        let patch = s.set_value(0, 199.99999);
        assert!(patch.angle > FULL_SWEEP);
        assert_eq!(s.sweep(), FULL_SWEEP);

        let NodeChange::Attribute { value: d, .. } = &patch.changes[2] else {
            panic!("expected the active arc path");
        };
        let tokens: Vec<_> = d.split_whitespace().collect();
        assert_eq!(tokens.len(), 11);
        assert_ne!(tokens[1..3], tokens[9..11]);

        s.set_value(0, 100.00001);
        assert_eq!(s.sweep(), MIN_SWEEP);
    }

    #[test]
    fn test_set_value_clamps_and_snaps() {
        let mut s = slider(SliderConfig::new("a").with_range(0.0, 100.0).with_step(25.0));
        assert_eq!(s.set_value(0, 60.0).value, 50.0);
        assert_eq!(s.set_value(0, 500.0).value, 100.0);
        assert_eq!(s.set_value(0, -5.0).value, 0.0);
    }

    #[test]
    fn test_scene_paint_order() {
        let s = slider(SliderConfig::new("Fuel level"));
        let group = s.scene(0);
        let classes: Vec<_> = group
            .elements()
            .map(|e| e.get_attr("class").unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            classes,
            [
                "fuel-level-track-gap",
                "fuel-level-track",
                "fuel-level-active-gap",
                "fuel-level-active",
                "fuel-level-handle"
            ]
        );
        let track = group.find_key("slider-0-track").unwrap();
        assert_eq!(track.get_attr("stroke-dasharray"), Some("6 2"));
        assert_eq!(track.get_attr("stroke"), Some("#d8dde3"));
        let handle = group.find_key("slider-0-handle").unwrap();
        assert_eq!(handle.get_attr("transform"), Some("translate(50 7)"));
        assert_eq!(handle.get_attr("r"), Some("5"));
    }

    #[test]
    fn test_ring_hit_testing() {
        let s = slider(SliderConfig::new("a"));
        // Ring radius 43 around (50, 50), stroke 10
        assert!(s.hit_ring(Point::new(93.0, 50.0)));
        assert!(s.hit_ring(Point::new(50.0, 96.0)));
        assert!(!s.hit_ring(Point::new(50.0, 50.0)));
        assert!(s.hit_handle(Point::new(50.0, 7.0)));
        assert!(!s.hit_handle(Point::new(93.0, 50.0)));
    }
}
