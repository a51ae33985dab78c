//! In-memory SVG/HTML element tree and its serialization.
//!
//! Drawing code builds `Element` values and hands them back to the caller
//! instead of mutating a shared document. The tree can be inspected in tests
//! (`find_by_id`, `find_all`) and written out with `quick-xml`.

use std::fmt::Display;

use heatmap_common::{HeatmapError, HeatmapResult};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// HTML elements that must be written with an explicit end tag even when empty.
const HTML_CONTAINERS: &[&str] = &["div", "span", "p"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any earlier value.
    pub fn attr(mut self, name: &str, value: impl Display) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute parsed as a number.
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        self.get_attr(name)?.parse().ok()
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Direct element children.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Depth-first search (self included) for an element with `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|e| e.find_by_id(id))
    }

    /// All descendants (self included) matching `pred`, in document order.
    pub fn find_all<'a>(&'a self, pred: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if pred(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.walk(pred, found);
        }
    }

    /// Serialize the tree as markup.
    pub fn to_markup(&self) -> HeatmapResult<String> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)
            .map_err(|e| HeatmapError::Render(format!("SVG serialization failed: {}", e)))?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| HeatmapError::Render(format!("SVG is not UTF-8: {}", e)))
    }
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> Result<(), quick_xml::Error> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attrs {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && !HTML_CONTAINERS.contains(&element.name.as_str()) {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for node in &element.children {
        match node {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

/// `translate(x,y)` transform attribute value.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_replaces_existing() {
        let el = Element::new("rect").attr("x", 1).attr("x", 2.5);
        assert_eq!(el.get_attr("x"), Some("2.5"));
        assert_eq!(el.attr_f64("x"), Some(2.5));
    }

    #[test]
    fn test_markup_escapes_text_and_attributes() {
        let el = Element::new("text")
            .attr("data-label", "a<b")
            .text("1 & 2");
        assert_eq!(
            el.to_markup().unwrap(),
            r#"<text data-label="a&lt;b">1 &amp; 2</text>"#
        );
    }

    #[test]
    fn test_empty_div_keeps_end_tag() {
        let markup = Element::new("div").attr("id", "tooltip").to_markup().unwrap();
        assert_eq!(markup, r#"<div id="tooltip"></div>"#);
        let markup = Element::new("rect").to_markup().unwrap();
        assert_eq!(markup, "<rect/>");
    }

    #[test]
    fn test_find_by_id_and_class() {
        let tree = Element::new("svg")
            .child(Element::new("g").attr("id", "legend"))
            .child(Element::new("rect").attr("class", "cell bright"));
        assert_eq!(tree.find_by_id("legend").map(|e| e.name()), Some("g"));
        assert_eq!(tree.find_all(|e| e.has_class("cell")).len(), 1);
    }
}
