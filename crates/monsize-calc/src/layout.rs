//! Shared scaling for drawing monitors proportionally.
//!
//! Every monitor in a comparison is drawn with the same scale factor so the
//! boxes keep their relative physical sizes. The factor is chosen so the
//! widest and the tallest monitor both fit the viewport, minus a margin.

use crate::{CalcError, DisplayColor, MonitorConfiguration, PhysicalDimensions, Resolution};

/// Target drawing area with a uniform safety margin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Viewport {
    /// Available width in abstract units.
    pub width: f64,
    /// Available height in abstract units.
    pub height: f64,
    /// Fraction of the fitted scale actually used, in `(0, 1]`.
    pub margin: f64,
}

impl Viewport {
    /// Default margin: use 90% of the fitted size.
    pub const DEFAULT_MARGIN: f64 = 0.9;

    /// Create a viewport with the default margin.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Self::DEFAULT_MARGIN,
        }
    }

    /// Replace the margin fraction.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

impl Default for Viewport {
    /// A 1200-unit wide container with 80 units of padding, 400 units tall.
    fn default() -> Self {
        Self::new(1120.0, 400.0)
    }
}

/// Compute one scale factor that fits every monitor in the viewport.
///
/// `scale = min(vw / max_width, vh / max_height) * margin`
///
/// # Errors
///
/// Returns [`CalcError::EmptyConfigurationSet`] when `dimensions` is empty.
/// Callers should render a placeholder instead of calling this with nothing.
pub fn shared_scale_factor(
    dimensions: &[PhysicalDimensions],
    viewport: Viewport,
) -> Result<f64, CalcError> {
    let (max_width, max_height) = max_extent(dimensions).ok_or(CalcError::EmptyConfigurationSet)?;
    let fit = (viewport.width / max_width).min(viewport.height / max_height);
    Ok(fit * viewport.margin)
}

/// Largest width and largest height over a set, or `None` if empty.
fn max_extent(dimensions: &[PhysicalDimensions]) -> Option<(f64, f64)> {
    if dimensions.is_empty() {
        return None;
    }
    let max_width = dimensions.iter().map(|d| d.width).fold(f64::MIN, f64::max);
    let max_height = dimensions.iter().map(|d| d.height).fold(f64::MIN, f64::max);
    Some((max_width, max_height))
}

/// One monitor drawn at the shared scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScaledBox {
    /// Configuration id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Colour tag.
    pub color: DisplayColor,
    /// Scaled width in viewport units.
    pub width: f64,
    /// Scaled height in viewport units.
    pub height: f64,
    /// Unscaled physical dimensions in inches.
    pub dimensions: PhysicalDimensions,
    /// Panel resolution, shown in the box label.
    pub resolution: Resolution,
}

/// Result of laying out a comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(tag = "kind", rename_all = "snake_case"))]
pub enum Layout {
    /// Nothing to draw.
    Empty,
    /// Boxes sharing one scale, anchored at the same top-left corner.
    Scaled {
        /// The shared scale factor.
        scale: f64,
        /// Container width: the largest physical width, scaled.
        container_width: f64,
        /// Container height: the largest physical height, scaled.
        container_height: f64,
        /// Boxes ordered by physical area, largest first, so smaller
        /// monitors are drawn on top of larger ones.
        boxes: Vec<ScaledBox>,
    },
}

/// Lay out monitors for a proportional size comparison.
///
/// Returns [`Layout::Empty`] for an empty slice.
#[must_use]
pub fn layout_comparison(monitors: &[MonitorConfiguration], viewport: Viewport) -> Layout {
    let dimensions: Vec<PhysicalDimensions> =
        monitors.iter().map(MonitorConfiguration::dimensions).collect();

    let Some((max_width, max_height)) = max_extent(&dimensions) else {
        return Layout::Empty;
    };
    let Ok(scale) = shared_scale_factor(&dimensions, viewport) else {
        return Layout::Empty;
    };

    let mut boxes: Vec<ScaledBox> = monitors
        .iter()
        .zip(&dimensions)
        .map(|(monitor, dims)| ScaledBox {
            id: monitor.id().to_owned(),
            name: monitor.name().to_owned(),
            color: monitor.color(),
            width: dims.width * scale,
            height: dims.height * scale,
            dimensions: *dims,
            resolution: monitor.resolution(),
        })
        .collect();
    boxes.sort_by(|a, b| b.dimensions.area().total_cmp(&a.dimensions.area()));

    tracing::debug!(monitors = boxes.len(), scale, "laid out size comparison");

    Layout::Scaled {
        scale,
        container_width: max_width * scale,
        container_height: max_height * scale,
        boxes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AspectRatio, PALETTE, find_preset, physical_dimensions};

    fn dims(diagonal: f64, ratio: &str) -> PhysicalDimensions {
        physical_dimensions(diagonal, AspectRatio::parse(ratio).unwrap())
    }

    fn preset(name: &str, color: usize) -> MonitorConfiguration {
        find_preset(name).unwrap().to_configuration(PALETTE[color])
    }

    #[test]
    fn test_scale_factor_bounded_by_height() {
        let set = [dims(27.0, "16:9"), dims(34.0, "21:9")];
        let scale = shared_scale_factor(&set, Viewport::new(1120.0, 400.0)).unwrap();

        let expected = (1120.0 / set[1].width).min(400.0 / set[1].height) * 0.9;
        assert_eq!(scale, expected);
        // Height is the binding constraint
        assert!(400.0 / set[1].height < 1120.0 / set[1].width);
        assert!((scale - 26.88).abs() < 0.01, "scale {scale}");
    }

    #[test]
    fn test_scale_factor_uses_max_of_each_axis_independently() {
        // Tall narrow and short wide monitors: max width and max height
        // come from different entries
        let set = [
            PhysicalDimensions { width: 10.0, height: 40.0 },
            PhysicalDimensions { width: 50.0, height: 5.0 },
        ];
        let scale = shared_scale_factor(&set, Viewport::new(100.0, 100.0).with_margin(1.0)).unwrap();
        assert_eq!(scale, 2.0);
    }

    #[test]
    fn test_scaled_extent_fits_viewport() {
        let ratios = ["4:3", "16:10", "16:9", "21:9", "32:9", "9:16"];
        let diagonals = [13.3, 24.0, 34.0, 49.0, 77.0];
        let viewports = [
            Viewport::new(1120.0, 400.0),
            Viewport::new(300.0, 900.0).with_margin(0.5),
            Viewport::new(1.0, 1.0).with_margin(0.99),
        ];

        for viewport in viewports {
            let set: Vec<PhysicalDimensions> = ratios
                .iter()
                .zip(diagonals.iter().cycle())
                .map(|(r, d)| dims(*d, r))
                .collect();
            let scale = shared_scale_factor(&set, viewport).unwrap();
            for d in &set {
                assert!(d.width * scale <= viewport.width);
                assert!(d.height * scale <= viewport.height);
            }
        }
    }

    #[test]
    fn test_scale_factor_is_bit_identical_on_repeat() {
        let set = [dims(27.0, "16:9"), dims(34.0, "21:9"), dims(49.0, "32:9")];
        let viewport = Viewport::default();

        let first = shared_scale_factor(&set, viewport).unwrap();
        for _ in 0..3 {
            assert_eq!(shared_scale_factor(&set, viewport).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_scale_factor_empty_set() {
        assert_eq!(
            shared_scale_factor(&[], Viewport::default()),
            Err(CalcError::EmptyConfigurationSet)
        );
        assert_eq!(layout_comparison(&[], Viewport::default()), Layout::Empty);
    }

    #[test]
    fn test_layout_orders_by_area_largest_first() {
        let monitors = vec![
            preset("Full HD 24", 0),
            preset("OLED 55", 1),
            preset("Ultrawide 34", 2),
        ];

        let Layout::Scaled { scale, container_width, container_height, boxes } =
            layout_comparison(&monitors, Viewport::default())
        else {
            panic!("expected a scaled layout");
        };

        let names: Vec<&str> = boxes.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["OLED 55\"", "Ultrawide 34\"", "Full HD 24\""]);

        // The 55" panel is both the widest and the tallest
        let largest = monitors[1].dimensions();
        assert_eq!(container_width, largest.width * scale);
        assert_eq!(container_height, largest.height * scale);
        assert!(container_width <= 1120.0 && container_height <= 400.0);

        for b in &boxes {
            assert_eq!(b.width, b.dimensions.width * scale);
            assert_eq!(b.height, b.dimensions.height * scale);
        }
        assert_eq!(boxes[0].color, PALETTE[1]);
        assert_eq!(boxes[0].resolution.to_string(), "3840x2160");
    }

    #[test]
    fn test_layout_ties_keep_insertion_order() {
        let first = preset("4K 27", 0);
        let second = preset("QHD 27", 1);
        let Layout::Scaled { boxes, .. } =
            layout_comparison(&[first.clone(), second.clone()], Viewport::default())
        else {
            panic!("expected a scaled layout");
        };
        assert_eq!(boxes[0].id, first.id());
        assert_eq!(boxes[1].id, second.id());
    }
}
