//! Physical dimension, pixel density and unit conversion.
//!
//! All functions here are pure and assume validated input: a positive finite
//! diagonal and a parsed [`AspectRatio`] / [`Resolution`]. Validation belongs
//! to the boundary that builds a [`MonitorConfiguration`](crate::MonitorConfiguration).

use crate::{AspectRatio, CalcError, Resolution};

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Validated screen diagonal in inches.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Diagonal(f64);

impl Diagonal {
    /// Validate a diagonal in inches.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidDiagonal`] for zero, negative, or non-finite values.
    pub fn new(inches: f64) -> Result<Self, CalcError> {
        if inches.is_finite() && inches > 0.0 {
            Ok(Self(inches))
        } else {
            Err(CalcError::InvalidDiagonal(inches))
        }
    }

    /// Build from a value known to be positive and finite.
    pub(crate) const fn from_trusted(inches: f64) -> Self {
        Self(inches)
    }

    /// Diagonal in inches.
    #[must_use]
    pub fn inches(self) -> f64 {
        self.0
    }
}

/// Physical width and height of a panel, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhysicalDimensions {
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
}

impl PhysicalDimensions {
    /// Width in centimetres.
    #[must_use]
    pub fn width_cm(&self) -> f64 {
        inches_to_cm(self.width)
    }

    /// Height in centimetres.
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        inches_to_cm(self.height)
    }

    /// Screen area in square inches.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Diagonal recomputed from width and height.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// Compute physical width and height from a diagonal and aspect ratio.
///
/// For a rectangle with `width = ratio * height`, the diagonal satisfies
/// `d² = height² * (ratio² + 1)`, so `height = d / sqrt(ratio² + 1)`.
///
/// # Example
///
/// ```
/// use monsize_calc::{AspectRatio, physical_dimensions};
///
/// let dims = physical_dimensions(27.0, AspectRatio::WIDESCREEN);
/// assert!((dims.width - 23.53).abs() < 0.01);
/// assert!((dims.height - 13.24).abs() < 0.01);
/// ```
#[must_use]
pub fn physical_dimensions(diagonal: f64, aspect: AspectRatio) -> PhysicalDimensions {
    let ratio = aspect.ratio();
    let height = diagonal / ratio.mul_add(ratio, 1.0).sqrt();
    let width = height * ratio;
    PhysicalDimensions { width, height }
}

/// Pixels per inch along the diagonal, rounded to the nearest integer.
///
/// Ties round away from zero. `diagonal` must be positive.
///
/// # Example
///
/// ```
/// use monsize_calc::{Resolution, pixel_density};
///
/// let res = Resolution::new(3840, 2160).unwrap();
/// assert_eq!(pixel_density(res, 27.0), 163);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pixel_density(resolution: Resolution, diagonal: f64) -> u32 {
    debug_assert!(diagonal > 0.0, "diagonal must be positive");
    (resolution.diagonal_pixels() / diagonal).round() as u32
}

/// Convert inches to centimetres. No rounding is applied.
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}
