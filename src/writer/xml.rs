//! XML tree handed to the serializer
//!
//! `XmlElement` follows the element model of lxml-style trees: besides its
//! children a node holds the text right after its start tag and the tail
//! text following its end tag. Serialization streams the tree through
//! `quick_xml::Writer`.

use std::collections::BTreeMap;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::trace;

use crate::error::Result;

use super::WriteConfig;

/// A serializable XML node with string attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    tail: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes, sorted by name
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn set_tail(&mut self, tail: impl Into<String>) {
        self.tail = Some(tail.into());
    }

    pub fn append(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Add mixed-content text at the current end of this node
    ///
    /// Before any child this extends the node's own text, afterwards the
    /// tail of the last child.
    pub fn push_text(&mut self, text: &str) {
        let slot = match self.children.last_mut() {
            Some(last) => &mut last.tail,
            None => &mut self.text,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }

    /// Whether this node holds character data next to its child elements
    ///
    /// Mixed content is written exactly as stored, never indented.
    pub fn is_mixed(&self) -> bool {
        self.text.is_some() || self.children.iter().any(|child| child.tail.is_some())
    }

    /// Serialize this node as a complete document
    pub fn write_document<W: Write>(&self, sink: W, config: &WriteConfig) -> Result<()> {
        let mut writer = if config.pretty_print {
            Writer::new_with_indent(sink, b' ', config.indent)
        } else {
            Writer::new(sink)
        };
        if config.xml_declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        }
        write_node(&mut writer, self)?;

        let mut sink = writer.into_inner();
        if config.pretty_print {
            sink.write_all(b"\n")?;
        }
        sink.flush()?;
        Ok(())
    }
}

fn start_tag(node: &XmlElement) -> BytesStart<'_> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    start
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &XmlElement) -> Result<()> {
    trace!(name = %node.name, children = node.children.len(), "writing node");
    let start = start_tag(node);

    if node.text.is_none() && node.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else if node.is_mixed() {
        writer.write_event(Event::Start(start))?;
        // A text event, even an empty one, keeps the end tag on this line
        let text = node.text.as_deref().unwrap_or_default();
        writer.write_event(Event::Text(BytesText::new(text)))?;
        {
            let mut inline = Writer::new(writer.get_mut());
            for child in &node.children {
                write_inline(&mut inline, child)?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    } else {
        writer.write_event(Event::Start(start))?;
        for child in &node.children {
            write_node(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    }

    if let Some(tail) = &node.tail {
        writer.write_event(Event::Text(BytesText::new(tail)))?;
    }
    Ok(())
}

/// Write a subtree of mixed content without any added whitespace
fn write_inline<W: Write>(writer: &mut Writer<W>, node: &XmlElement) -> Result<()> {
    let start = start_tag(node);
    if node.text.is_none() && node.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        if let Some(text) = &node.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &node.children {
            write_inline(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    }
    if let Some(tail) = &node.tail {
        writer.write_event(Event::Text(BytesText::new(tail)))?;
    }
    Ok(())
}
