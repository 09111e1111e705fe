mod node;
mod xml;

pub use node::{Element, Node};
pub use xml::RawXmlEvent;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::errors::{Error, Result};
use crate::geometry::ViewBox;

/// An SVG document held as an owned element tree.
///
/// Values are never modified in place; the layout and style steps build new
/// documents from an existing one, so a loaded source can serve as a
/// template for any number of variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    root: Element,
}

impl SvgDocument {
    /// Read and parse the SVG document at `path`.
    ///
    /// Unreadable files give `Error::Io`; malformed content gives `Error::Parse`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)?;
        let doc = text.parse::<Self>()?;
        debug!(
            "loaded {} ({} elements)",
            path.display(),
            doc.element_count()
        );
        Ok(doc)
    }

    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The root element's `viewBox`.
    pub fn viewbox(&self) -> Result<ViewBox> {
        self.root
            .get_attr("viewBox")
            .ok_or_else(|| Error::Document("root element has no viewBox".into()))?
            .parse()
    }

    /// Text content of the embedded style element (the root's first child element).
    pub fn style_text(&self) -> Option<String> {
        self.root.child_elements().next().map(Element::text)
    }

    pub fn element_count(&self) -> usize {
        self.root.element_count()
    }

    /// Serialize the document (root element only) as SVG text.
    pub fn to_svg_string(&self) -> Result<String> {
        xml::write_root(&self.root)
    }
}

impl FromStr for SvgDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let root = xml::parse_root(s)?;
        if root.local_name() != "svg" {
            return Err(Error::Parse(format!(
                "expected <svg> root element, found <{}>",
                root.name()
            )));
        }
        Ok(Self { root })
    }
}
