//! Generate codestar logo assets from the master SVG artwork.
//!
//! The pipeline is: load the source document, crop it unless the tagline
//! is wanted ([`Layout`]), then for each [`ColorVariant`] inject that
//! variant's stylesheet and export every requested [`Format`] and size.
//! Files are rendered into a staging directory which is then zipped or
//! copied into place ([`Packaging`]).
//!
//! ```no_run
//! use codestar_logo::{generate, ColorVariant, Format, GenerateConfig, SvgDocument};
//!
//! let template = SvgDocument::load("logo.svg")?;
//! let config = GenerateConfig {
//!     colors: vec![ColorVariant::Dark],
//!     formats: vec![Format::Png],
//!     widths: vec![256],
//!     ..Default::default()
//! };
//! let files = generate(&template, &config, std::path::Path::new("out"))?;
//! # Ok::<(), codestar_logo::Error>(())
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod document;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod package;
pub mod render;
pub mod style;

use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{info, warn};

pub use document::SvgDocument;
pub use errors::{Error, Result};
pub use layout::{Layout, LogoOption};
pub use package::Packaging;
pub use render::{Dimension, Format, RenderRequest};
pub use style::ColorVariant;

/// What to render: the cross product of colors, formats and sizes.
///
/// Widths and heights only apply to raster formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateConfig {
    pub colors: Vec<ColorVariant>,
    pub options: Vec<LogoOption>,
    pub formats: Vec<Format>,
    pub widths: Vec<u32>,
    pub heights: Vec<u32>,
}

impl GenerateConfig {
    /// Drop repeated colors, options and formats, keeping first-seen order.
    ///
    /// Repeated widths or heights are left alone as they'd only rewrite
    /// the same file.
    pub fn dedup(self) -> Self {
        Self {
            colors: self.colors.into_iter().unique().collect(),
            options: self.options.into_iter().unique().collect(),
            formats: self.formats.into_iter().unique().collect(),
            ..self
        }
    }

    /// Every output this config describes, in render order.
    pub fn requests(&self) -> Vec<RenderRequest> {
        let mut requests = Vec::new();
        for &color in &self.colors {
            if self.formats.contains(&Format::Svg) {
                requests.push(RenderRequest::vector(color, &self.options));
            }
            if self.formats.contains(&Format::Png) {
                requests.extend(RenderRequest::raster_set(
                    color,
                    &self.options,
                    &self.widths,
                    &self.heights,
                ));
            }
        }
        requests
    }
}

/// Render every output described by `config` from `template` into `out_dir`.
///
/// The template is only read; each color works on its own styled copy.
/// Returns the paths written, in order.
pub fn generate(
    template: &SvgDocument,
    config: &GenerateConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if config.colors.is_empty() {
        warn!("no colors requested; nothing to render");
    }
    if config.formats.contains(&Format::Png) && config.widths.is_empty() && config.heights.is_empty()
    {
        warn!("png requested without any width or height; no png files will be rendered");
    }
    if !config.formats.contains(&Format::Png)
        && !(config.widths.is_empty() && config.heights.is_empty())
    {
        warn!("widths and heights only apply to png output; ignoring them");
    }

    let layout = Layout::from_options(&config.options);
    let base = layout.apply(template)?;
    info!("using {layout:?} layout (ratio {:.4})", layout.ratio());

    let requests = config.requests();
    let mut written = Vec::with_capacity(requests.len());
    for (color, group) in &requests.iter().chunk_by(|r| r.color) {
        let styled = color.apply(&base)?;
        for request in group {
            written.push(request.export(&styled, layout.ratio(), out_dir)?);
        }
    }
    Ok(written)
}
