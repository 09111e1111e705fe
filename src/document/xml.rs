use super::{Element, Node};
use crate::errors::{Error, Result};

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event as XmlEvent};
use quick_xml::{Reader, Writer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawXmlEvent(XmlEvent<'static>);

impl From<AttrError> for Error {
    fn from(err: AttrError) -> Self {
        Error::Parse(format!("attribute: {err}"))
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Build an `Element` (without children) from a start tag. Failures here are
/// low-level XML errors (bad attribute syntax, non-UTF8 names) rather than
/// anything about the logo's structure.
fn element_from_start(e: &BytesStart<'_>) -> Result<Element> {
    let name = utf8(e.name().into_inner())?;
    let attrs = e
        .attributes()
        .map(|a| -> Result<(String, String)> {
            let a = a?;
            let key = utf8(a.key.into_inner())?;
            let value = a
                .unescape_value()
                .map_err(|e| Error::Parse(format!("attribute '{key}': {e}")))?
                .into_owned();
            Ok((key, value))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Element::from_parts(name, attrs))
}

/// Parse `input` into its root element.
///
/// Anything outside the root element (XML declaration, doctype, comments)
/// is dropped, matching what ends up in the exported files.
pub(super) fn parse_root(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);

    // Stack of open elements; the finished root lands in `root`.
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        let pos = reader.buffer_position();
        let ev = reader
            .read_event()
            .map_err(|e| Error::Parse(format!("XML error near byte {pos}: {e}")))?;
        let node = match ev {
            XmlEvent::Eof => break,
            XmlEvent::Start(bs) => {
                stack.push(element_from_start(&bs)?);
                continue;
            }
            XmlEvent::End(_) => {
                // quick-xml checks end names match by default
                let done = stack
                    .pop()
                    .ok_or_else(|| Error::Parse(format!("unexpected end tag at byte {pos}")))?;
                Node::Element(done)
            }
            XmlEvent::Empty(bs) => Node::Element(element_from_start(&bs)?),
            XmlEvent::Text(t) => Node::Text(utf8(&t.into_inner())?),
            XmlEvent::CData(c) => Node::CData(utf8(&c.into_inner())?),
            XmlEvent::Comment(c) => Node::Comment(utf8(&c.into_inner())?),
            other => Node::Other(RawXmlEvent(other.into_owned())),
        };

        match stack.last_mut() {
            Some(parent) => parent.push(node),
            None => {
                if let Node::Element(el) = node {
                    if root.is_some() {
                        return Err(Error::Parse(format!(
                            "multiple root elements (second is '{}')",
                            el.name()
                        )));
                    }
                    root = Some(el);
                }
                // top-level text, comments and declarations are dropped
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::Parse(format!("unclosed element '{}'", open.name())));
    }
    root.ok_or_else(|| Error::Parse("document has no root element".into()))
}

/// Serialize `root` and its subtree as UTF-8 XML text.
pub(super) fn write_root(root: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, root)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &Element) -> Result<()> {
    let mut bs = BytesStart::new(el.name());
    for (k, v) in el.get_attrs() {
        // (&str, &str) conversion escapes the value
        bs.push_attribute((k.as_str(), v.as_str()));
    }
    if el.children().is_empty() {
        writer.write_event(XmlEvent::Empty(bs))?;
        return Ok(());
    }
    writer.write_event(XmlEvent::Start(bs))?;
    for child in el.children() {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(content) => {
                writer.write_event(XmlEvent::Text(BytesText::from_escaped(content.as_str())))?
            }
            Node::CData(content) => {
                writer.write_event(XmlEvent::CData(BytesCData::new(content.as_str())))?
            }
            Node::Comment(content) => {
                writer.write_event(XmlEvent::Comment(BytesText::from_escaped(content.as_str())))?
            }
            Node::Other(raw) => writer.write_event(raw.0.clone())?,
        }
    }
    writer.write_event(XmlEvent::End(BytesEnd::new(el.name())))?;
    Ok(())
}
