//! Declarative node descriptions for SVG and HTML trees.
//!
//! A [`Node`] is a plain description; [`build`] realizes it through a
//! [`TreeBuilder`] backend (the browser DOM, a markup writer, a test
//! recorder). Elements may carry a key so the caller can find the realized
//! node afterwards without tagging the node itself.

use std::collections::HashMap;
use std::fmt::Write;

/// A node in a declarative tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element description: tag, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// Lookup key for the realized node; never written as an attribute.
    pub key: Option<String>,
}

/// Create an element description.
pub fn ce<K, V>(
    tag: &str,
    attrs: impl IntoIterator<Item = (K, V)>,
    children: impl IntoIterator<Item = Node>,
) -> Element
where
    K: Into<String>,
    V: Into<String>,
{
    Element {
        tag: tag.to_string(),
        attrs: attrs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
        children: children.into_iter().collect(),
        key: None,
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Depth-first search for a keyed descendant (including `self`).
    pub fn find_key(&self, key: &str) -> Option<&Element> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(element) => element.find_key(key),
            Node::Text(_) => None,
        })
    }

    /// Mutable variant of [`Element::find_key`].
    pub fn find_key_mut(&mut self, key: &str) -> Option<&mut Element> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.find_key_mut(key),
            Node::Text(_) => None,
        })
    }

    /// Child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    /// Serialize as XML/HTML markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_markup(out),
                Node::Text(text) => out.push_str(&escape(text, false)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

fn escape(text: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A backend that can realize node descriptions.
pub trait TreeBuilder {
    type Node: Clone;
    type Error;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, Self::Error>;
    fn create_text(&mut self, text: &str) -> Result<Self::Node, Self::Error>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str)
        -> Result<(), Self::Error>;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), Self::Error>;
}

/// A realized tree: its root and every keyed element.
#[derive(Debug)]
pub struct Built<N> {
    pub root: N,
    pub keyed: HashMap<String, N>,
}

/// Realize `element` and all its descendants through `builder`.
pub fn build<B: TreeBuilder>(builder: &mut B, element: &Element) -> Result<Built<B::Node>, B::Error> {
    let mut keyed = HashMap::new();
    let root = build_element(builder, element, &mut keyed)?;
    Ok(Built { root, keyed })
}

fn build_element<B: TreeBuilder>(
    builder: &mut B,
    element: &Element,
    keyed: &mut HashMap<String, B::Node>,
) -> Result<B::Node, B::Error> {
    let node = builder.create_element(&element.tag)?;
    for (name, value) in &element.attrs {
        builder.set_attribute(&node, name, value)?;
    }
    for child in &element.children {
        let child_node = match child {
            Node::Element(child) => build_element(builder, child, keyed)?,
            Node::Text(text) => builder.create_text(text)?,
        };
        builder.append_child(&node, &child_node)?;
    }
    if let Some(key) = &element.key {
        keyed.insert(key.clone(), node.clone());
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records operations into an arena so tests can inspect the result.
    #[derive(Default)]
    struct Arena {
        nodes: Vec<String>,
        ops: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl TreeBuilder for Arena {
        type Node = usize;
        type Error = String;

        fn create_element(&mut self, tag: &str) -> Result<usize, String> {
            if self.fail_on == Some(tag) {
                return Err(format!("cannot create {tag}"));
            }
            self.nodes.push(tag.to_string());
            Ok(self.nodes.len() - 1)
        }

        fn create_text(&mut self, text: &str) -> Result<usize, String> {
            self.nodes.push(format!("#text:{text}"));
            Ok(self.nodes.len() - 1)
        }

        fn set_attribute(&mut self, node: &usize, name: &str, value: &str) -> Result<(), String> {
            self.ops.push(format!("{node}.{name}={value}"));
            Ok(())
        }

        fn append_child(&mut self, parent: &usize, child: &usize) -> Result<(), String> {
            self.ops.push(format!("{parent}<-{child}"));
            Ok(())
        }
    }

    fn sample() -> Element {
        ce(
            "svg",
            [("width", "10")],
            [
                Element::new("path").attr("d", "M 0 0").keyed("arc").into(),
                Node::from("label"),
            ],
        )
    }

    #[test]
    fn test_build_realizes_tree() {
        let mut arena = Arena::default();
        let built = build(&mut arena, &sample()).unwrap();

        assert_eq!(built.root, 0);
        assert_eq!(arena.nodes, ["svg", "path", "#text:label"]);
        assert_eq!(arena.ops, ["0.width=10", "1.d=M 0 0", "0<-1", "0<-2"]);
        assert_eq!(built.keyed.get("arc"), Some(&1));
    }

    #[test]
    fn test_build_propagates_errors() {
        let mut arena = Arena {
            fail_on: Some("path"),
            ..Arena::default()
        };
        assert_eq!(build(&mut arena, &sample()).unwrap_err(), "cannot create path");
    }

    #[test]
    fn test_markup_escapes() {
        let element = Element::new("span")
            .attr("title", "a \"quoted\" <b>")
            .text("1 < 2 & 3");
        assert_eq!(
            element.to_markup(),
            "<span title=\"a &quot;quoted&quot; &lt;b&gt;\">1 &lt; 2 &amp; 3</span>"
        );
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut element = Element::new("circle").attr("r", "4");
        element.set_attr("r", "5");
        assert_eq!(element.get_attr("r"), Some("5"));
        assert_eq!(element.attrs.len(), 1);
    }

    #[test]
    fn test_find_key() {
        let mut tree = sample();
        assert_eq!(tree.find_key("arc").map(|e| e.tag.as_str()), Some("path"));
        tree.find_key_mut("arc").unwrap().set_attr("d", "M 1 1");
        assert_eq!(tree.find_key("arc").unwrap().get_attr("d"), Some("M 1 1"));
        assert!(tree.find_key("missing").is_none());
        assert_eq!(tree.text_content(), "label");
    }
}
