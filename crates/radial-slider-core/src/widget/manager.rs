//! The widget: a stack of concentric sliders sharing one canvas.

use super::slider::{Slider, SliderPatch};
use crate::config::{SliderConfig, normalize};
use crate::error::{ConfigError, WidgetError, WidgetResult};
use crate::geometry::fmt_num;
use crate::input::{EventTarget, SliderEvent};
use crate::labels::{LabelOptions, LabelPanel};
use crate::tree::Element;
use kurbo::{Point, Vec2};

/// Owns every slider of one container and routes input to them.
///
/// Sliders are kept largest first, which is also their paint order: a
/// larger ring is drawn behind the smaller rings nested inside it.
#[derive(Debug, Clone)]
pub struct RadialSliderWidget {
    sliders: Vec<Slider>,
    /// Side length of the square canvas (the largest slider's size).
    canvas_size: f64,
    /// Container's top-left corner in client coordinates.
    origin: Point,
    /// Last pointer position seen by any handler.
    last_pointer: Option<Point>,
    labels: Option<LabelPanel>,
}

impl RadialSliderWidget {
    /// Validate and order `configs`, then place every slider at its minimum.
    pub fn new(configs: Vec<SliderConfig>) -> Result<Self, ConfigError> {
        let configs = normalize(configs)?;
        let canvas_size = configs[0].size;
        let sliders: Vec<_> = configs
            .into_iter()
            .map(|config| Slider::new(config, canvas_size))
            .collect();
        log::debug!(
            "Created radial slider widget with {} slider(s) on a {}px canvas",
            sliders.len(),
            canvas_size
        );

        Ok(Self {
            sliders,
            canvas_size,
            origin: Point::ZERO,
            last_pointer: None,
            labels: None,
        })
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, index: usize) -> Option<&Slider> {
        self.sliders.get(index)
    }

    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    pub fn labels(&self) -> Option<&LabelPanel> {
        self.labels.as_ref()
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.sliders.get(index).map(Slider::value)
    }

    pub fn values(&self) -> Vec<f64> {
        self.sliders.iter().map(Slider::value).collect()
    }

    /// Index of the first slider named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.sliders.iter().position(|slider| slider.name() == name)
    }

    /// Record where the container currently sits on screen.
    ///
    /// Call before every event so scrolling and resizing are picked up.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Shared ring center in client coordinates.
    pub fn screen_center(&self) -> Point {
        self.origin + Vec2::new(self.canvas_size / 2.0, self.canvas_size / 2.0)
    }

    /// Attach a label panel and describe its contents.
    pub fn attach_labels(&mut self, container_id: &str, options: LabelOptions) -> Element {
        let panel = LabelPanel::new(container_id, options);
        let scene = panel.scene(&self.sliders);
        log::debug!("Attached label panel to '{container_id}'");
        self.labels = Some(panel);
        scene
    }

    /// Describe the whole drawing: an `<svg>` with one group per slider.
    pub fn scene(&self) -> Element {
        let size = fmt_num(self.canvas_size);
        self.sliders.iter().enumerate().fold(
            Element::new("svg")
                .attr("xmlns", "http://www.w3.org/2000/svg")
                .attr("class", "radial-slider-canvas")
                .attr("width", size.clone())
                .attr("height", size.clone())
                .attr("viewBox", format!("0 0 {size} {size}"))
                .keyed("root"),
            |svg, (index, slider)| svg.child(slider.scene(index)),
        )
    }

    /// Find what lies under a canvas-local point, topmost first.
    pub fn target_at(&self, point: Point) -> EventTarget {
        let topmost_first = self.sliders.iter().enumerate().rev();
        for (index, slider) in topmost_first.clone() {
            if slider.hit_handle(point) {
                return EventTarget::Handle(index);
            }
        }
        for (index, slider) in topmost_first {
            if slider.hit_ring(point) {
                return EventTarget::Body(index);
            }
        }
        EventTarget::Document
    }

    /// Apply one input event and return the resulting changes.
    pub fn handle_event(&mut self, event: &SliderEvent) -> Vec<SliderPatch> {
        if let Some(position) = event.position() {
            self.last_pointer = Some(position);
        }
        let center = self.screen_center();

        match event {
            SliderEvent::Down { target, source } => match *target {
                EventTarget::Handle(index) => {
                    if let Some(slider) = self.sliders.get_mut(index) {
                        slider.begin_rotation(center);
                        log::debug!("Slider '{}' grabbed", slider.name());
                    }
                    Vec::new()
                }
                EventTarget::Body(index) => source
                    .position()
                    .and_then(|pointer| self.update(index, pointer))
                    .into_iter()
                    .collect(),
                EventTarget::Document => Vec::new(),
            },
            SliderEvent::Move { target, source } => {
                let Some(pointer) = source.position() else {
                    return Vec::new();
                };
                match *target {
                    EventTarget::Body(index) if source.is_touch() => {
                        self.update(index, pointer).into_iter().collect()
                    }
                    EventTarget::Handle(index) | EventTarget::Body(index) => {
                        let rotating = self.sliders.get(index).is_some_and(Slider::is_rotating);
                        if rotating {
                            self.update(index, pointer).into_iter().collect()
                        } else {
                            Vec::new()
                        }
                    }
                    EventTarget::Document => {
                        let rotating: Vec<usize> = (0..self.sliders.len())
                            .filter(|&index| self.sliders[index].is_rotating())
                            .collect();
                        rotating
                            .into_iter()
                            .filter_map(|index| self.update(index, pointer))
                            .collect()
                    }
                }
            }
            SliderEvent::Up => {
                for slider in &mut self.sliders {
                    slider.end_rotation();
                }
                Vec::new()
            }
        }
    }

    /// Set a slider's value programmatically.
    pub fn set_value(&mut self, index: usize, value: f64) -> WidgetResult<SliderPatch> {
        if !value.is_finite() {
            return Err(WidgetError::NonFiniteValue);
        }
        let slider = self
            .sliders
            .get_mut(index)
            .ok_or(WidgetError::UnknownSlider(index))?;
        let mut patch = slider.set_value(index, value);
        self.append_label_changes(&mut patch);
        Ok(patch)
    }

    fn update(&mut self, index: usize, pointer: Point) -> Option<SliderPatch> {
        let center = self.screen_center();
        let Some(slider) = self.sliders.get_mut(index) else {
            log::warn!("Event for unknown slider {index}");
            return None;
        };
        let mut patch = slider.update_from_pointer(index, pointer, center)?;
        self.append_label_changes(&mut patch);
        Some(patch)
    }

    fn append_label_changes(&self, patch: &mut SliderPatch) {
        if let Some(labels) = &self.labels {
            patch
                .changes
                .extend(labels.changes(patch.index, patch.angle, patch.value));
        }
    }
}
