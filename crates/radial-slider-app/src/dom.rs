//! Realizes scene descriptions as browser DOM nodes.

use radial_slider_core::{NodeChange, TreeBuilder};
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Creates nodes in `document`, inside `namespace` when one is given.
pub struct DomBuilder {
    document: Document,
    namespace: Option<&'static str>,
}

impl DomBuilder {
    pub fn svg(document: Document) -> Self {
        Self {
            document,
            namespace: Some(SVG_NS),
        }
    }

    pub fn html(document: Document) -> Self {
        Self {
            document,
            namespace: None,
        }
    }
}

impl TreeBuilder for DomBuilder {
    type Node = Node;
    type Error = JsValue;

    fn create_element(&mut self, tag: &str) -> Result<Node, JsValue> {
        let element = match self.namespace {
            Some(ns) => self.document.create_element_ns(Some(ns), tag)?,
            None => self.document.create_element(tag)?,
        };
        Ok(element.into())
    }

    fn create_text(&mut self, text: &str) -> Result<Node, JsValue> {
        Ok(self.document.create_text_node(text).into())
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) -> Result<(), JsValue> {
        match node.dyn_ref::<web_sys::Element>() {
            Some(element) => element.set_attribute(name, value),
            None => Err(JsValue::from_str("attribute set on a non-element node")),
        }
    }

    fn append_child(&mut self, parent: &Node, child: &Node) -> Result<(), JsValue> {
        parent.append_child(child).map(|_| ())
    }
}

/// Apply `changes` to the nodes recorded under their keys.
///
/// Keys with no realized node (labels not attached yet) are skipped.
pub fn apply_changes(nodes: &HashMap<String, Node>, changes: &[NodeChange]) -> Result<(), JsValue> {
    for change in changes {
        match change {
            NodeChange::Attribute { key, name, value } => {
                if let Some(element) = nodes.get(key).and_then(|n| n.dyn_ref::<web_sys::Element>()) {
                    element.set_attribute(name, value)?;
                }
            }
            NodeChange::Text { key, text } => {
                if let Some(node) = nodes.get(key) {
                    node.set_text_content(Some(text));
                }
            }
        }
    }
    Ok(())
}
