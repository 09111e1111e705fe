// Color variants and the stylesheet each one injects into the logo.

use std::fmt;

use crate::document::{Node, SvgDocument};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    Standard,
    Light,
    Dark,
    Monochrome,
}

/// Fill colors and opacity substituted into the logo stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub left_fill: &'static str,
    pub right_fill: &'static str,
    pub right_opacity: &'static str,
}

impl ColorVariant {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Light, Self::Dark, Self::Monochrome];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Monochrome => "monochrome",
        }
    }

    pub fn palette(&self) -> Palette {
        let (left_fill, right_fill, right_opacity) = match self {
            Self::Standard => ("#f08300", "#ffffff", "0.45"),
            Self::Light => ("#f08300", "#000000", "1.00"),
            Self::Dark => ("#f08300", "#ffffff", "1.00"),
            Self::Monochrome => ("#000000", "#000000", "1.00"),
        };
        Palette {
            left_fill,
            right_fill,
            right_opacity,
        }
    }

    /// Stylesheet text for this variant.
    ///
    /// `.st0` is the mark, `.st1` the wordmark and `.st3` the tagline; the
    /// latter two always share a fill.
    pub fn stylesheet(&self) -> String {
        let Palette {
            left_fill,
            right_fill,
            right_opacity,
        } = self.palette();
        format!(
            "
        .st0{{fill:{left_fill};}}
        .st1{{fill:{right_fill};opacity:{right_opacity};}}
        .st3{{fill:{right_fill};opacity:{right_opacity};}}
    "
        )
    }

    /// Build a copy of `doc` whose embedded style element (the root's first
    /// child element) holds this variant's stylesheet and nothing else.
    pub fn apply(&self, doc: &SvgDocument) -> Result<SvgDocument> {
        let root = doc.root();
        let mut replaced = false;
        let children = root
            .children()
            .iter()
            .map(|node| match node {
                Node::Element(style) if !replaced => {
                    replaced = true;
                    Node::Element(style.with_text(self.stylesheet()))
                }
                other => other.clone(),
            })
            .collect();
        if !replaced {
            return Err(Error::Document(
                "root element has no style element to replace".into(),
            ));
        }
        Ok(SvgDocument::from_root(root.with_children(children)))
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
