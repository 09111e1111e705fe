use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// The `viewBox` rectangle of an SVG document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same origin and width, with the height derived from `ratio` (width / height).
    pub fn with_ratio(&self, ratio: f64) -> Self {
        Self {
            height: self.width * (1. / ratio),
            ..*self
        }
    }
}

impl FromStr for ViewBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values = attr_split(s)
            .map(str::parse::<f64>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Document(format!("invalid viewBox '{s}': {e}")))?;
        match values[..] {
            [x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(Error::Document(format!(
                "viewBox '{s}' should have 4 values, found {}",
                values.len()
            ))),
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fstr(self.x),
            fstr(self.y),
            fstr(self.width),
            fstr(self.height)
        )
    }
}

/// Returns iterator over whitespace-or-comma separated values
fn attr_split(input: &str) -> impl Iterator<Item = &str> + '_ {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|v| !v.is_empty())
}

/// Format a number as C's `%g` would: six significant digits, trailing
/// zeros removed, exponent form for very large or small magnitudes.
pub fn fstr(x: f64) -> String {
    const PRECISION: i32 = 6;

    if x == 0. {
        return "0".into();
    } else if !x.is_finite() {
        return x.to_string();
    }
    // exponent after rounding to the given precision, as %g decides on that
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, x);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{x:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
