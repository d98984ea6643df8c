//! Aspect ratio parsing.

use std::fmt;
use std::str::FromStr;

use crate::CalcError;

/// Width-to-height proportion of a display, parsed from `"W:H"`.
///
/// Both components are positive and finite, and the ratio lies between
/// [`MIN_RATIO`](Self::MIN_RATIO) and [`MAX_RATIO`](Self::MAX_RATIO).
/// Components are kept as given
/// (`21:9` stays `21:9`, it is not reduced to `7:3`) so the label renders
/// back the way it was written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// Widescreen `16:9`, the most common panel shape.
    pub const WIDESCREEN: Self = Self {
        width: 16.0,
        height: 9.0,
    };

    /// Tallest accepted shape, `1:100`.
    pub const MIN_RATIO: f64 = 0.01;

    /// Widest accepted shape, `100:1`.
    pub const MAX_RATIO: f64 = 100.0;

    /// Build from components known to be valid.
    pub(crate) const fn from_trusted(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create an aspect ratio from its two components.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidAspectRatio`] if either component is not a
    /// positive finite number or the ratio is outside `1:100` to `100:1`.
    pub fn new(width: f64, height: f64) -> Result<Self, CalcError> {
        if !is_valid(width, height) {
            return Err(CalcError::InvalidAspectRatio(format!("{width}:{height}")));
        }
        Ok(Self { width, height })
    }

    /// Parse a `"W:H"` label.
    ///
    /// Surrounding whitespace around either component is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidAspectRatio`] when the colon is missing, a
    /// part is not numeric, a component is zero or negative, or the shape is
    /// more extreme than `1:100` or `100:1`.
    pub fn parse(label: &str) -> Result<Self, CalcError> {
        let invalid = || CalcError::InvalidAspectRatio(label.to_owned());

        let (w, h) = label.split_once(':').ok_or_else(invalid)?;
        let width: f64 = w.trim().parse().map_err(|_| invalid())?;
        let height: f64 = h.trim().parse().map_err(|_| invalid())?;

        if !is_valid(width, height) {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }

    /// Width component.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height component.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The ratio `width / height`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

fn is_valid(width: f64, height: f64) -> bool {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    positive(width)
        && positive(height)
        && (AspectRatio::MIN_RATIO..=AspectRatio::MAX_RATIO).contains(&(width / height))
}

impl FromStr for AspectRatio {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AspectRatio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
