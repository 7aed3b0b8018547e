//! WebAssembly entry point and DOM binding.

use crate::dom::{self, DomBuilder};
use crate::error::AppError;
use kurbo::Point;
use radial_slider_core::{
    EventTarget, LabelOptions, PointerSource, RadialSliderWidget, SliderConfig, SliderEvent,
    SliderPart, build,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Node, TouchEvent};

#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();
    // Another module on the page may already own the logger.
    console_log::init_with_level(log::Level::Info).ok();
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// An event listener that unregisters itself when dropped.
struct Listener {
    target: web_sys::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Widget state plus the DOM it drives.
struct Mounted {
    widget: RadialSliderWidget,
    document: Document,
    container: HtmlElement,
    root: web_sys::Element,
    nodes: HashMap<String, Node>,
    label_root: Option<Node>,
    listeners: Vec<Listener>,
}

impl Mounted {
    /// Measure where the drawing sits in the viewport.
    fn sync_origin(&mut self) {
        let rect = self.root.get_bounding_client_rect();
        self.widget.set_origin(Point::new(rect.left(), rect.top()));
    }

    /// The handle or ring under the pointer, if any.
    fn target_under(&self, source: &PointerSource) -> Option<EventTarget> {
        let local = source.position()? - self.widget.origin().to_vec2();
        match self.widget.target_at(local) {
            EventTarget::Document => None,
            target => Some(target),
        }
    }

    fn dispatch(&mut self, event: &SliderEvent) -> bool {
        let patches = self.widget.handle_event(event);
        for patch in &patches {
            if let Err(err) = dom::apply_changes(&self.nodes, &patch.changes) {
                log::error!("Failed to update slider {}: {err:?}", patch.index);
            }
        }
        !patches.is_empty()
    }
}

fn client_point(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Read the pointer position(s) carried by a mouse or touch event.
fn pointer_source(event: &Event) -> Option<PointerSource> {
    if event.type_().starts_with("touch") {
        let touches = event.unchecked_ref::<TouchEvent>().touches();
        let points = (0..touches.length())
            .filter_map(|i| touches.get(i))
            .map(|touch| client_point(touch.client_x(), touch.client_y()))
            .collect();
        Some(PointerSource::Touch(points))
    } else {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        Some(PointerSource::Mouse(client_point(mouse.client_x(), mouse.client_y())))
    }
}

fn listen<F>(
    target: &web_sys::EventTarget,
    kind: &'static str,
    mounted: Weak<RefCell<Mounted>>,
    translate: F,
) -> Result<Listener, JsValue>
where
    F: Fn(&Mounted, &Event) -> Option<SliderEvent> + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(inner) = mounted.upgrade() else {
            return;
        };
        let Ok(mut state) = inner.try_borrow_mut() else {
            log::warn!("Dropped re-entrant '{kind}' event");
            return;
        };
        state.sync_origin();
        let Some(slider_event) = translate(&*state, &event) else {
            return;
        };
        // A grab changes nothing yet but must not start a text selection.
        if state.dispatch(&slider_event) || slider_event.is_grab() {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

/// Press on the drawing: grab a handle or jump on a ring.
fn pressed(state: &Mounted, event: &Event) -> Option<SliderEvent> {
    let source = pointer_source(event)?;
    let target = state.target_under(&source)?;
    Some(SliderEvent::Down { target, source })
}

/// Touch dragged across the drawing.
fn touched(state: &Mounted, event: &Event) -> Option<SliderEvent> {
    let source = pointer_source(event)?;
    let target = state.target_under(&source)?;
    Some(SliderEvent::Move { target, source })
}

fn moved_anywhere(_: &Mounted, event: &Event) -> Option<SliderEvent> {
    Some(SliderEvent::Move {
        target: EventTarget::Document,
        source: pointer_source(event)?,
    })
}

fn wire(mounted: &Rc<RefCell<Mounted>>) -> Result<Vec<Listener>, JsValue> {
    let weak = Rc::downgrade(mounted);
    let state = mounted.borrow();
    let root: &web_sys::EventTarget = state.root.as_ref();
    let document: &web_sys::EventTarget = state.document.as_ref();

    let mut listeners = Vec::new();
    for kind in ["mousedown", "touchstart"] {
        listeners.push(listen(root, kind, weak.clone(), pressed)?);
    }
    listeners.push(listen(root, "touchmove", weak.clone(), touched)?);
    for kind in ["mousemove", "touchmove"] {
        listeners.push(listen(document, kind, weak.clone(), moved_anywhere)?);
    }
    for kind in ["mouseup", "touchend"] {
        listeners.push(listen(document, kind, weak.clone(), |_, _| Some(SliderEvent::Up))?);
    }
    Ok(listeners)
}

fn find_container(document: &Document, id: &str) -> Result<HtmlElement, AppError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::ContainerNotFound(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Dom(format!("'{id}' is not an HTML element")))
}

fn document() -> Result<Document, AppError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::Dom("no document".to_string()))
}

/// A set of concentric radial sliders mounted into a page element.
#[wasm_bindgen]
pub struct RadialSlider {
    inner: Rc<RefCell<Mounted>>,
}

#[wasm_bindgen]
impl RadialSlider {
    /// Draw the sliders described by `configs` inside `#container_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, configs: JsValue) -> Result<RadialSlider, JsValue> {
        let configs: Vec<SliderConfig> = serde_wasm_bindgen::from_value(configs)?;
        let widget = RadialSliderWidget::new(configs).map_err(AppError::from)?;

        let document = document()?;
        let container = find_container(&document, container_id)?;
        let size = format!("{}px", widget.canvas_size());
        let built = build(&mut DomBuilder::svg(document.clone()), &widget.scene())?;
        let root = built.root.dyn_into::<web_sys::Element>()?;
        let count = widget.sliders().len();

        let inner = Rc::new(RefCell::new(Mounted {
            widget,
            document,
            container,
            root,
            nodes: built.keyed,
            label_root: None,
            listeners: Vec::new(),
        }));
        // Nothing reaches the page until every listener is in place.
        let listeners = wire(&inner)?;
        {
            let mut mounted = inner.borrow_mut();
            mounted.listeners = listeners;
            let style = mounted.container.style();
            style.set_property("width", &size)?;
            style.set_property("height", &size)?;
            mounted.container.append_child(&mounted.root)?;
        }

        log::info!("Mounted {count} slider(s) in '{container_id}'");
        Ok(RadialSlider { inner })
    }

    /// Show name, angle and value of every slider inside `#container_id`.
    #[wasm_bindgen(js_name = attachLabels)]
    pub fn attach_labels(&self, container_id: &str, currency: Option<String>) -> Result<(), JsValue> {
        let mut mounted = self.inner.borrow_mut();
        let container = find_container(&mounted.document, container_id)?;
        let mut options = LabelOptions::default();
        if let Some(currency) = currency {
            options.currency = currency;
        }

        let scene = mounted.widget.attach_labels(container_id, options);
        let built = build(&mut DomBuilder::html(mounted.document.clone()), &scene)?;
        if let Some(old) = mounted.label_root.take() {
            if let Some(parent) = old.parent_node() {
                parent.remove_child(&old)?;
            }
        }
        container.append_child(&built.root)?;
        mounted.nodes.extend(built.keyed);
        mounted.label_root = Some(built.root);
        Ok(())
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.inner.borrow().widget.value(index)
    }

    pub fn values(&self) -> Vec<f64> {
        self.inner.borrow().widget.values()
    }

    /// Move a slider to `value`. Returns the value after snapping.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, index: usize, value: f64) -> Result<f64, JsValue> {
        let mut mounted = self.inner.borrow_mut();
        let patch = mounted.widget.set_value(index, value).map_err(AppError::from)?;
        dom::apply_changes(&mounted.nodes, &patch.changes)?;
        Ok(patch.value)
    }

    /// The `<svg>` element.
    #[wasm_bindgen(getter)]
    pub fn root(&self) -> web_sys::Element {
        self.inner.borrow().root.clone()
    }

    /// One `<g>` per slider, largest first.
    #[wasm_bindgen(js_name = sliderNodes)]
    pub fn slider_nodes(&self) -> js_sys::Array {
        let mounted = self.inner.borrow();
        (0..mounted.widget.sliders().len())
            .filter_map(|index| mounted.nodes.get(&SliderPart::Group.key(index)))
            .cloned()
            .collect()
    }

    /// Remove the drawing and labels and stop listening for events.
    pub fn destroy(&self) {
        let listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
        drop(listeners);

        let mut mounted = self.inner.borrow_mut();
        let _ = mounted.container.remove_child(&mounted.root);
        if let Some(labels) = mounted.label_root.take() {
            if let Some(parent) = labels.parent_node() {
                let _ = parent.remove_child(&labels);
            }
        }
        mounted.nodes.clear();
        log::info!("Radial slider destroyed");
    }
}
