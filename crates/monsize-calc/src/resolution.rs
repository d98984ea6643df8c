//! Pixel resolution parsing.

use std::fmt;
use std::str::FromStr;

use crate::CalcError;

/// Panel resolution in pixels, parsed from `"WxH"` (e.g. `"3840x2160"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resolution {
    /// Horizontal pixel count.
    pub width: u32,
    /// Vertical pixel count.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution from pixel counts.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidResolution`] if either count is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, CalcError> {
        if width == 0 || height == 0 {
            return Err(CalcError::InvalidResolution(format!("{width}x{height}")));
        }
        Ok(Self { width, height })
    }

    /// Parse a `"WxH"` string. An uppercase `X` separator is accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidResolution`] when the separator is missing or
    /// either part is not a positive integer.
    pub fn parse(s: &str) -> Result<Self, CalcError> {
        let invalid = || CalcError::InvalidResolution(s.to_owned());

        let (w, h) = s
            .split_once('x')
            .or_else(|| s.split_once('X'))
            .ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;

        Self::new(width, height).map_err(|_| invalid())
    }

    /// Length of the pixel diagonal.
    #[must_use]
    pub fn diagonal_pixels(&self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height))
    }

    /// Total pixel count.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl FromStr for Resolution {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution() {
        let res = Resolution::parse("3840x2160").unwrap();
        assert_eq!(res.width, 3840);
        assert_eq!(res.height, 2160);
        assert_eq!(res.to_string(), "3840x2160");

        let upper: Resolution = "2560X1440".parse().unwrap();
        assert_eq!(upper, Resolution::new(2560, 1440).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in ["", "3840", "3840*2160", "x2160", "3840x", "-1x1080", "1.5x2", "0x1080"] {
            assert_eq!(
                Resolution::parse(s),
                Err(CalcError::InvalidResolution(s.to_owned())),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_diagonal_pixels() {
        let res = Resolution::new(3, 4).unwrap();
        assert_eq!(res.diagonal_pixels(), 5.0);
        assert_eq!(res.pixel_count(), 12);
    }
}
