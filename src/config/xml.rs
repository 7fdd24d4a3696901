//! Minimal XML element tree over quick-xml.
//!
//! Persisted configuration is small, so documents are read fully into an
//! [`XmlNode`] tree and written back from one.

use std::io::Cursor;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::error::PersistenceError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    /// Text is written as CDATA and read back verbatim.
    pub cdata: bool,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(name)
        }
    }

    pub fn with_cdata(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            cdata: true,
            ..Self::with_text(name, text)
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text of the named child, if present.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text.as_str())
    }
}

/// Parse a complete document and return its root element.
pub(crate) fn parse_document(input: &str) -> Result<XmlNode, PersistenceError> {
    let mut reader = Reader::from_reader(input.as_bytes());
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => stack.push(start_node(e)?),
            Ok(Event::Empty(ref e)) => {
                let node = start_node(e)?;
                close_node(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| PersistenceError::xml("Unbalanced end tag"))?;
                close_node(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| PersistenceError::xml(format!("Invalid text: {e}")))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e));
                    current.cdata = true;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PersistenceError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(PersistenceError::xml("Unexpected end of document"));
    }
    root.ok_or_else(|| PersistenceError::missing("element", "document root"))
}

fn start_node(e: &BytesStart<'_>) -> Result<XmlNode, PersistenceError> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|e| PersistenceError::xml(format!("Invalid tag name: {e}")))?
        .to_string();

    let mut node = XmlNode::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| PersistenceError::xml(format!("Invalid attribute: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| PersistenceError::xml(format!("Invalid attribute name: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| PersistenceError::xml(format!("Invalid attribute value: {e}")))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn close_node(
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), PersistenceError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => return Err(PersistenceError::xml("Multiple root elements")),
    }
    Ok(())
}

/// Serialize `root` as an indented document with an XML declaration.
pub(crate) fn write_document(root: &XmlNode) -> Result<String, PersistenceError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| PersistenceError::xml(format!("Write error: {e}")))?;
    write_node(&mut writer, root)?;

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| PersistenceError::xml(format!("Invalid UTF-8 output: {e}")))
}

fn write_node(writer: &mut Writer<Cursor<Vec<u8>>>, node: &XmlNode) -> Result<(), PersistenceError> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.children.is_empty() && node.text.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| PersistenceError::xml(format!("Write error: {e}")));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| PersistenceError::xml(format!("Write error: {e}")))?;
    if node.cdata {
        write_cdata(writer, &node.text)?;
    } else if !node.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&node.text)))
            .map_err(|e| PersistenceError::xml(format!("Write error: {e}")))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(|e| PersistenceError::xml(format!("Write error: {e}")))
}

/// Write `text` as CDATA sections, splitting wherever it contains `]]>`.
fn write_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, text: &str) -> Result<(), PersistenceError> {
    let mut rest = text;
    loop {
        let (section, tail) = match rest.find("]]>") {
            Some(at) => rest.split_at(at + 2),
            None => (rest, ""),
        };
        writer
            .write_event(Event::CData(BytesCData::new(section)))
            .map_err(|e| PersistenceError::xml(format!("Write error: {e}")))?;
        if tail.is_empty() {
            return Ok(());
        }
        rest = tail;
    }
}
