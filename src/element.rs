//! The SVG element tree
//!
//! An [`Element`] is a tag, a set of attributes and an ordered list of
//! children, where a child is either another element or a run of text.
//! Elements are built once, through [`Element::new`] or the fluent
//! [`ElementBuilder`], and never change afterwards.
//!
//! A few attributes get special treatment when an element is built:
//!
//! - `viewBox` given as a four item list becomes a [`ViewBox`]
//! - `dx` on a `text` element becomes a [`Kern`]
//! - `d` on a `path` element must be [`PathData`]
//! - the `svg` root always carries the SVG namespace and `version="1.1"`
//!
//! and two are renamed on output: `cls` is written as `class`, and
//! underscores in attribute names become hyphens (`stroke_width` is written
//! as `stroke-width`).
//!
//! ```rust
//! use svgast::{Element, Length};
//!
//! let rect = Element::rect()
//!     .attr("width", Length::mm(10))
//!     .attr("cls", "square")
//!     .build()
//!     .unwrap();
//! assert_eq!(rect.get("width").unwrap().to_string(), "10mm");
//! assert!(rect.get("height").is_err());
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use tracing::trace;

use crate::error::{Result, SvgError};
use crate::path::{PathData, PathInstruction};
use crate::units::{to_length, Length, Quantity};
use crate::writer::XmlElement;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const SVG_VERSION: &str = "1.1";

/// Element kinds, each with a fixed tag name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Document root
    Svg,
    Circle,
    Defs,
    Ellipse,
    G,
    Line,
    LinearGradient,
    Path,
    Polygon,
    Polyline,
    RadialGradient,
    Rect,
    Stop,
    Style,
    Symbol,
    Text,
    Title,
    Tspan,
    Use,
    /// Any other tag; the first character is lower-cased on output
    Custom(String),
}

impl Tag {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Tag name as written in the document
    pub fn name(&self) -> Cow<'_, str> {
        let name = match self {
            Tag::Svg => "svg",
            Tag::Circle => "circle",
            Tag::Defs => "defs",
            Tag::Ellipse => "ellipse",
            Tag::G => "g",
            Tag::Line => "line",
            Tag::LinearGradient => "linearGradient",
            Tag::Path => "path",
            Tag::Polygon => "polygon",
            Tag::Polyline => "polyline",
            Tag::RadialGradient => "radialGradient",
            Tag::Rect => "rect",
            Tag::Stop => "stop",
            Tag::Style => "style",
            Tag::Symbol => "symbol",
            Tag::Text => "text",
            Tag::Title => "title",
            Tag::Tspan => "tspan",
            Tag::Use => "use",
            Tag::Custom(name) => return Cow::Owned(lower_first(name)),
        };
        Cow::Borrowed(name)
    }

    /// Apply this tag's attribute rules
    fn prepare(&self, attributes: &mut BTreeMap<String, Value>) -> Result<()> {
        match self {
            Tag::Svg => {
                attributes.insert("xmlns".to_string(), Value::from(SVG_NAMESPACE));
                attributes.insert("version".to_string(), Value::from(SVG_VERSION));
            }
            Tag::Path => match attributes.get("d") {
                Some(Value::PathData(_)) => {}
                Some(other) => return Err(SvgError::wrong_kind("PathData", other.kind())),
                None => return Err(SvgError::not_found("d")),
            },
            Tag::Custom(name) if name.is_empty() => {
                return Err(SvgError::wrong_kind("non-empty tag name", "empty name"));
            }
            Tag::Text => {
                if let Some(dx) = attributes.remove("dx") {
                    let kern = Kern::from_value(&dx)?;
                    if !kern.is_empty() {
                        attributes.insert("dx".to_string(), Value::Kern(kern));
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The `viewBox` attribute: origin and size of the user coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub ox: Length,
    pub oy: Length,
    pub width: Length,
    pub height: Length,
}

impl ViewBox {
    pub fn new(
        ox: impl Into<Quantity>,
        oy: impl Into<Quantity>,
        width: impl Into<Quantity>,
        height: impl Into<Quantity>,
    ) -> Self {
        Self {
            ox: to_length(ox),
            oy: to_length(oy),
            width: to_length(width),
            height: to_length(height),
        }
    }

    /// Coerce an attribute value given as four lengths or numbers
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::ViewBox(vb) => Ok(*vb),
            Value::List(items) => match items.as_slice() {
                [ox, oy, width, height] => Ok(Self::new(
                    ox.as_quantity()?,
                    oy.as_quantity()?,
                    width.as_quantity()?,
                    height.as_quantity()?,
                )),
                _ => Err(SvgError::wrong_kind(
                    "four viewBox components",
                    format!("{} components", items.len()),
                )),
            },
            other => Err(SvgError::wrong_kind("viewBox components", other.kind())),
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.ox, self.oy, self.width, self.height)
    }
}

/// Per-glyph horizontal offsets for the `dx` attribute of text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kern(Vec<Length>);

impl Kern {
    pub fn new<Q: Into<Quantity>>(offsets: impl IntoIterator<Item = Q>) -> Self {
        Self(offsets.into_iter().map(to_length).collect())
    }

    /// Coerce a list of offsets, or a single offset
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Kern(kern) => Ok(kern.clone()),
            Value::List(items) => items
                .iter()
                .map(|item| item.as_quantity().map(to_length))
                .collect::<Result<Vec<_>>>()
                .map(Self),
            other => Ok(Self(vec![to_length(other.as_quantity()?)])),
        }
    }

    pub fn offsets(&self) -> &[Length] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Kern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|l| l.to_string()).collect();
        f.write_str(&parts.join(" "))
    }
}

/// An attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    /// Rendered as `1` or `0`
    Flag(bool),
    Str(String),
    Length(Length),
    ViewBox(ViewBox),
    PathData(PathData),
    Kern(Kern),
    /// A sequence of values, rendered space-separated
    List(Vec<Value>),
}

impl Value {
    /// Short name of the value's kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Flag(_) => "flag",
            Value::Str(_) => "string",
            Value::Length(_) => "Length",
            Value::ViewBox(_) => "ViewBox",
            Value::PathData(_) => "PathData",
            Value::Kern(_) => "Kern",
            Value::List(_) => "list",
        }
    }

    /// The value as a length or number
    pub fn as_quantity(&self) -> Result<Quantity> {
        match self {
            Value::Number(n) => Ok(Quantity::Number(*n)),
            Value::Length(l) => Ok(Quantity::Length(*l)),
            other => Err(SvgError::wrong_kind("Length or number", other.kind())),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Flag(b) => f.write_str(if *b { "1" } else { "0" }),
            Value::Str(s) => f.write_str(s),
            Value::Length(l) => fmt::Display::fmt(l, f),
            Value::ViewBox(vb) => fmt::Display::fmt(vb, f),
            Value::PathData(d) => fmt::Display::fmt(d, f),
            Value::Kern(k) => fmt::Display::fmt(k, f),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(" "))
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Flag(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Length> for Value {
    fn from(l: Length) -> Self {
        Value::Length(l)
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        match q {
            Quantity::Number(n) => Value::Number(n),
            Quantity::Length(l) => Value::Length(l),
        }
    }
}

impl From<ViewBox> for Value {
    fn from(vb: ViewBox) -> Self {
        Value::ViewBox(vb)
    }
}

impl From<PathData> for Value {
    fn from(d: PathData) -> Self {
        Value::PathData(d)
    }
}

impl From<Kern> for Value {
    fn from(k: Kern) -> Self {
        Value::Kern(k)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
    D: Into<Value>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Value::List(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

/// A child of an element: a nested element or a run of text
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

/// An immutable SVG element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Tag,
    attributes: BTreeMap<String, Value>,
    children: Vec<Node>,
}

impl Element {
    /// Build an element from its children and attributes
    ///
    /// Later attributes with the same name replace earlier ones.
    pub fn new<N, K, V>(
        tag: Tag,
        children: impl IntoIterator<Item = N>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        N: Into<Node>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut attributes: BTreeMap<String, Value> = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if let Some(view_box) = attributes.get_mut("viewBox") {
            *view_box = Value::ViewBox(ViewBox::from_value(view_box)?);
        }
        tag.prepare(&mut attributes)?;
        let children: Vec<Node> = children.into_iter().map(Into::into).collect();
        trace!(tag = %tag, attributes = attributes.len(), children = children.len(), "built element");
        Ok(Self {
            tag,
            attributes,
            children,
        })
    }

    /// Start building an element with the given tag
    pub fn build(tag: Tag) -> ElementBuilder {
        ElementBuilder::new(tag)
    }

    /// Document root
    pub fn svg() -> ElementBuilder {
        Self::build(Tag::Svg)
    }

    pub fn g() -> ElementBuilder {
        Self::build(Tag::G)
    }

    pub fn defs() -> ElementBuilder {
        Self::build(Tag::Defs)
    }

    pub fn rect() -> ElementBuilder {
        Self::build(Tag::Rect)
    }

    pub fn circle() -> ElementBuilder {
        Self::build(Tag::Circle)
    }

    pub fn text() -> ElementBuilder {
        Self::build(Tag::Text)
    }

    pub fn style() -> ElementBuilder {
        Self::build(Tag::Style)
    }

    pub fn symbol() -> ElementBuilder {
        Self::build(Tag::Symbol)
    }

    /// Path element drawing `d`
    pub fn path(d: impl IntoIterator<Item = PathInstruction>) -> ElementBuilder {
        Self::build(Tag::Path).attr("d", PathData::new(d))
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn tag_name(&self) -> Cow<'_, str> {
        self.tag.name()
    }

    /// Look up an attribute by the name it was set with
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.attributes
            .get(name)
            .ok_or_else(|| SvgError::not_found(name))
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Convert this element and its descendants into an XML tree
    ///
    /// Text that follows a child element becomes that child's tail.
    pub fn to_xml(&self) -> XmlElement {
        let attributes = self.attributes.iter().filter_map(|(name, value)| {
            let value = value.to_string();
            if name == "cls" {
                return (!value.is_empty()).then(|| ("class".to_string(), value));
            }
            Some((name.replace('_', "-"), value))
        });
        let mut xml = XmlElement::new(self.tag.name(), attributes);
        for child in &self.children {
            match child {
                Node::Text(text) => xml.push_text(text),
                Node::Element(element) => xml.append(element.to_xml()),
            }
        }
        xml
    }
}

impl Index<usize> for Element {
    type Output = Node;

    fn index(&self, idx: usize) -> &Node {
        &self.children[idx]
    }
}

impl<'a> IntoIterator for &'a Element {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// Collects children and attributes for an [`Element`]
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: Tag,
    children: Vec<Node>,
    attributes: Vec<(String, Value)>,
}

impl ElementBuilder {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            children: vec![],
            attributes: vec![],
        }
    }

    /// Set an attribute; setting the same name again replaces the value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the `class` attribute
    pub fn class(self, class: impl Into<String>) -> Self {
        let class: String = class.into();
        self.attr("cls", class)
    }

    /// Set the `viewBox` attribute
    pub fn view_box(
        self,
        ox: impl Into<Quantity>,
        oy: impl Into<Quantity>,
        width: impl Into<Quantity>,
        height: impl Into<Quantity>,
    ) -> Self {
        self.attr("viewBox", ViewBox::new(ox, oy, width, height))
    }

    /// Append a child element or text
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<Element> {
        Element::new(self.tag, self.children, self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{line_to_absolute, move_to_absolute};
    use crate::units::Unit;

    fn my_element() -> ElementBuilder {
        Element::build(Tag::custom("MyElement"))
    }

    #[test]
    fn test_attributes() {
        let e = my_element()
            .attr("fooBar", 3)
            .attr("gant", "chart")
            .attr("viewBox", (1, 2, 3, 4))
            .build()
            .unwrap();
        assert_eq!(e.get("fooBar").unwrap(), &Value::Number(3.0));
        assert_eq!(e.get("gant").unwrap().as_str(), Some("chart"));
        assert!(matches!(e.get("viewBox").unwrap(), Value::ViewBox(_)));
        assert!(matches!(
            e.get("bad"),
            Err(SvgError::AttributeNotFound(name)) if name == "bad"
        ));
    }

    #[test]
    fn test_children() {
        let c = my_element().attr("child", "childy").build().unwrap();
        let e = my_element()
            .child(c.clone())
            .child("non-element child")
            .attr("child", "nope")
            .build()
            .unwrap();
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].as_element(), Some(&c));
        assert_eq!(e[1].as_text(), Some("non-element child"));
        let texts: Vec<_> = e.iter().filter_map(Node::as_text).collect();
        assert_eq!(texts, vec!["non-element child"]);
    }

    #[test]
    fn test_new_with_children_and_attributes() {
        let e = Element::new(
            Tag::G,
            vec![Node::from("a"), Node::from("b")],
            [("id", "group"), ("fill", "red")],
        )
        .unwrap();
        assert_eq!(e.len(), 2);
        assert_eq!(e.get("fill").unwrap().to_string(), "red");
    }

    #[test]
    fn test_later_attribute_wins() {
        let e = Element::rect().attr("x", 1).attr("x", 2).build().unwrap();
        assert_eq!(e.get("x").unwrap(), &Value::Number(2.0));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(Tag::Svg.name(), "svg");
        assert_eq!(Tag::G.name(), "g");
        assert_eq!(Tag::LinearGradient.name(), "linearGradient");
        assert_eq!(Tag::custom("Tosh").name(), "tosh");
        assert_eq!(Tag::custom("FeGaussianBlur").name(), "feGaussianBlur");
    }

    #[test]
    fn test_empty_custom_tag_rejected() {
        let err = Element::build(Tag::custom("")).build().unwrap_err();
        assert!(matches!(err, SvgError::WrongKind { .. }));
    }

    #[test]
    fn test_view_box_coercion() {
        let e = Element::g()
            .attr("viewBox", (0, 0, Length::mm(10), Length::mm(10)))
            .build()
            .unwrap();
        let vb = ViewBox::from_value(e.get("viewBox").unwrap()).unwrap();
        assert_eq!(vb.ox.unit(), Unit::User);
        assert_eq!(vb.width.unit(), Unit::Mm);
        assert_eq!(vb.to_string(), "0 0 10mm 10mm");
    }

    #[test]
    fn test_view_box_from_vec() {
        let e = Element::g()
            .attr("viewBox", vec![0, 0, 10, 10])
            .build()
            .unwrap();
        assert_eq!(e.get("viewBox").unwrap().to_string(), "0 0 10 10");
    }

    #[test]
    fn test_view_box_wrong_shape() {
        let err = Element::g().attr("viewBox", vec![0, 0, 10]).build().unwrap_err();
        assert!(matches!(err, SvgError::WrongKind { .. }));
        let err = Element::g().attr("viewBox", "0 0 10 10").build().unwrap_err();
        assert!(matches!(err, SvgError::WrongKind { .. }));
        let err = Element::g()
            .attr("viewBox", (0, 0, "wide", 10))
            .build()
            .unwrap_err();
        assert!(matches!(err, SvgError::WrongKind { .. }));
    }

    #[test]
    fn test_svg_injects_namespace_and_version() {
        let svg = Element::svg()
            .attr("version", "2.0")
            .attr("xmlns", "urn:nope")
            .build()
            .unwrap();
        assert_eq!(svg.get("version").unwrap().as_str(), Some("1.1"));
        assert_eq!(
            svg.get("xmlns").unwrap().as_str(),
            Some("http://www.w3.org/2000/svg")
        );
    }

    #[test]
    fn test_path_stores_path_data() {
        let path = Element::path([move_to_absolute(0, 0), line_to_absolute(1, 1)])
            .build()
            .unwrap();
        assert_eq!(path.get("d").unwrap().to_string(), "M 0 0  L 1 1");
    }

    #[test]
    fn test_path_requires_d() {
        let err = Element::build(Tag::Path).build().unwrap_err();
        assert!(matches!(err, SvgError::AttributeNotFound(name) if name == "d"));
        let err = Element::build(Tag::Path)
            .attr("d", "M 0 0")
            .build()
            .unwrap_err();
        assert!(matches!(err, SvgError::WrongKind { .. }));
    }

    #[test]
    fn test_text_dx_becomes_kern() {
        let text = Element::text()
            .child("hi")
            .attr("dx", vec![Value::from(1), Value::from(Length::pt(2))])
            .build()
            .unwrap();
        assert!(matches!(text.get("dx").unwrap(), Value::Kern(_)));
        assert_eq!(text.get("dx").unwrap().to_string(), "1 2pt");
    }

    #[test]
    fn test_text_empty_dx_is_dropped() {
        let text = Element::text()
            .attr("dx", Vec::<Value>::new())
            .build()
            .unwrap();
        assert!(text.get("dx").is_err());
    }

    #[test]
    fn test_dx_on_other_tags_untouched() {
        let g = Element::g().attr("dx", vec![1, 2]).build().unwrap();
        assert!(matches!(g.get("dx").unwrap(), Value::List(_)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(0).to_string(), "0");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(true).to_string(), "1");
        assert_eq!(Value::from(false).to_string(), "0");
        assert_eq!(Value::from(Length::cm(3)).to_string(), "3cm");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "a b");
    }

    #[test]
    fn test_to_xml_attribute_names() {
        let e = Element::rect()
            .attr("cls", "square")
            .attr("stroke_width", 2)
            .attr("x", 0)
            .build()
            .unwrap();
        let xml = e.to_xml();
        let names: Vec<_> = xml.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["class", "stroke-width", "x"]);
        assert_eq!(xml.attributes()["class"], "square");
    }

    #[test]
    fn test_to_xml_drops_empty_class() {
        let xml = Element::rect().attr("cls", "").attr("x", 1).build().unwrap().to_xml();
        assert!(!xml.attributes().contains_key("class"));
        assert!(!xml.attributes().contains_key("cls"));
        assert_eq!(xml.attributes()["x"], "1");
    }

    #[test]
    fn test_to_xml_text_and_tail() {
        let text = Element::text()
            .child("hello")
            .child(my_element().build().unwrap())
            .child("world")
            .build()
            .unwrap();
        let xml = text.to_xml();
        assert_eq!(xml.name(), "text");
        assert_eq!(xml.text(), Some("hello"));
        assert_eq!(xml.children().len(), 1);
        assert_eq!(xml.children()[0].name(), "myElement");
        assert_eq!(xml.children()[0].tail(), Some("world"));
    }
}
