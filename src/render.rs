// Turning a styled logo document into output files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::info;
use resvg::{tiny_skia, usvg};

use crate::document::SvgDocument;
use crate::errors::{Error, Result};
use crate::layout::LogoOption;
use crate::style::ColorVariant;

/// Common prefix of every generated file name
pub const FILE_PREFIX: &str = "codestar_logo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    Png,
    Svg,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The one constrained side of a raster output; the other follows from the
/// aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width(u32),
    Height(u32),
}

impl Dimension {
    /// Pixel size `(width, height)` for this dimension at `ratio` (width / height).
    ///
    /// Fractional sizes are truncated; neither side is ever less than 1.
    pub fn pixel_size(&self, ratio: f64, retina: bool) -> (u32, u32) {
        let factor = if retina { 2. } else { 1. };
        let (w, h) = match *self {
            Self::Width(w) => {
                let w = f64::from(w) * factor;
                (w, w * (1. / ratio))
            }
            Self::Height(h) => {
                let h = f64::from(h) * factor;
                (h * ratio, h)
            }
        };
        (to_pixels(w), to_pixels(h))
    }
}

fn to_pixels(v: f64) -> u32 {
    (v.trunc() as u32).max(1)
}

/// Everything that determines a single output file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderRequest {
    pub color: ColorVariant,
    pub options: Vec<LogoOption>,
    pub format: Format,
    /// Always `Some` for raster formats, `None` for vector ones
    pub dimension: Option<Dimension>,
    pub retina: bool,
}

impl RenderRequest {
    pub fn vector(color: ColorVariant, options: &[LogoOption]) -> Self {
        Self {
            color,
            options: options.to_vec(),
            format: Format::Svg,
            dimension: None,
            retina: false,
        }
    }

    pub fn raster(
        color: ColorVariant,
        options: &[LogoOption],
        dimension: Dimension,
        retina: bool,
    ) -> Self {
        Self {
            color,
            options: options.to_vec(),
            format: Format::Png,
            dimension: Some(dimension),
            retina,
        }
    }

    /// All PNG requests for one color: each height then each width, every
    /// one at 1x and 2x. Equal pixel sizes are deliberately not merged.
    pub fn raster_set(
        color: ColorVariant,
        options: &[LogoOption],
        widths: &[u32],
        heights: &[u32],
    ) -> Vec<Self> {
        heights
            .iter()
            .map(|&h| Dimension::Height(h))
            .chain(widths.iter().map(|&w| Dimension::Width(w)))
            .flat_map(|dim| {
                [false, true]
                    .into_iter()
                    .map(move |retina| Self::raster(color, options, dim, retina))
            })
            .collect()
    }

    /// Output file name, e.g. `codestar_logo_dark_(tagline)_[width=512]@2x.png`
    pub fn filename(&self) -> String {
        let mut name = format!("{FILE_PREFIX}_{}", self.color);
        if !self.options.is_empty() {
            name.push_str(&format!("_({})", self.options.iter().join("_")));
        }
        match self.dimension {
            Some(Dimension::Width(w)) => name.push_str(&format!("_[width={w}]")),
            Some(Dimension::Height(h)) => name.push_str(&format!("_[height={h}]")),
            None => {}
        }
        if self.retina {
            name.push_str("@2x");
        }
        format!("{name}.{}", self.format)
    }

    /// Render `doc` for this request and write it into `dir`.
    ///
    /// `ratio` is the reference aspect ratio of the current layout.
    pub fn export(&self, doc: &SvgDocument, ratio: f64, dir: &Path) -> Result<PathBuf> {
        let data = match (self.format, self.dimension) {
            (Format::Svg, _) => doc.to_svg_string()?.into_bytes(),
            (Format::Png, Some(dim)) => rasterize(doc, ratio, dim, self.retina)?,
            (Format::Png, None) => {
                return Err(Error::Render(format!(
                    "raster output '{}' needs a width or height",
                    self.filename()
                )))
            }
        };
        let path = dir.join(self.filename());
        fs::write(&path, &data)?;
        info!("wrote {} ({} bytes)", path.display(), data.len());
        Ok(path)
    }
}

/// Rasterize `doc` to PNG data, sized from `dim` and `ratio` (see
/// [`Dimension::pixel_size`]) and doubled when `retina` is set.
pub fn rasterize(doc: &SvgDocument, ratio: f64, dim: Dimension, retina: bool) -> Result<Vec<u8>> {
    let svg = doc.to_svg_string()?;
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| Error::Render(format!("could not build render tree: {e}")))?;

    let (width, height) = dim.pixel_size(ratio, retina);
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Render(format!("could not allocate {width}x{height} pixmap")))?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| Error::Render(format!("PNG encoding failed: {e}")))
}
