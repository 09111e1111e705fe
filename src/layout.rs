// Cropping the artwork to the wordmark when the tagline isn't wanted.

use std::fmt;

use log::debug;

use crate::document::{Element, Node, SvgDocument};
use crate::errors::Result;

/// Aspect ratio (width / height) of the full artwork, tagline included
pub const TAGLINE_RATIO: f64 = 2102. / 558.;
/// Aspect ratio (width / height) of the artwork cropped above the tagline
pub const CROPPED_RATIO: f64 = 2102. / 421.;

/// Optional logo features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogoOption {
    Tagline,
}

impl LogoOption {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tagline => "tagline",
        }
    }
}

impl fmt::Display for LogoOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which portion of the artwork ends up in the outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Whole artwork, tagline included
    Full,
    /// Tagline group removed and the viewBox cropped to match
    Cropped,
}

impl Layout {
    pub fn from_options(options: &[LogoOption]) -> Self {
        if options.contains(&LogoOption::Tagline) {
            Self::Full
        } else {
            Self::Cropped
        }
    }

    /// Reference aspect ratio (width / height) used for raster sizing.
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Full => TAGLINE_RATIO,
            Self::Cropped => CROPPED_RATIO,
        }
    }

    /// Build the template for this layout from `source`.
    ///
    /// `Full` returns an unchanged copy. `Cropped` recomputes the viewBox
    /// height from the cropped ratio and drops the second `<g>` within each
    /// top-level `<g>`; if there is no such group, nothing is removed.
    pub fn apply(&self, source: &SvgDocument) -> Result<SvgDocument> {
        match self {
            Self::Full => Ok(source.clone()),
            Self::Cropped => {
                let viewbox = source.viewbox()?.with_ratio(self.ratio());
                let root = source.root();
                let children = root
                    .children()
                    .iter()
                    .map(|node| match node {
                        Node::Element(g) if g.local_name() == "g" => {
                            Node::Element(without_nth_group(g, 1))
                        }
                        other => other.clone(),
                    })
                    .collect();
                let root = root
                    .with_attr("viewBox", viewbox.to_string())
                    .with_children(children);
                debug!("cropped viewBox to {viewbox}");
                Ok(SvgDocument::from_root(root))
            }
        }
    }
}

/// Copy of `parent` without its `n`th (zero-based) child `<g>` element.
fn without_nth_group(parent: &Element, n: usize) -> Element {
    let mut seen = 0;
    let mut removed = false;
    let children = parent
        .children()
        .iter()
        .filter(|node| match node {
            Node::Element(el) if el.local_name() == "g" => {
                seen += 1;
                let drop = seen == n + 1;
                removed |= drop;
                !drop
            }
            _ => true,
        })
        .cloned()
        .collect();
    if !removed {
        debug!("no group #{} under <{parent}>; nothing removed", n + 1);
    }
    parent.with_children(children)
}
