//! Side-by-side specification table for a size comparison.

use crate::{MonitorConfiguration, PhysicalDimensions, Resolution};

/// Computed metrics for one monitor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonitorMetrics {
    /// Configuration id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Diagonal in inches.
    pub diagonal: f64,
    /// Panel resolution.
    pub resolution: Resolution,
    /// Aspect ratio label.
    pub aspect_ratio: String,
    /// Pixel density in PPI.
    pub ppi: u32,
    /// Physical size in inches.
    pub dimensions: PhysicalDimensions,
    /// Physical width in centimetres.
    pub width_cm: f64,
    /// Physical height in centimetres.
    pub height_cm: f64,
}

impl MonitorMetrics {
    /// Compute all metrics for a configuration.
    #[must_use]
    pub fn compute(monitor: &MonitorConfiguration) -> Self {
        let dimensions = monitor.dimensions();
        Self {
            id: monitor.id().to_owned(),
            name: monitor.name().to_owned(),
            diagonal: monitor.diagonal().inches(),
            resolution: monitor.resolution(),
            aspect_ratio: monitor.aspect_ratio().to_string(),
            ppi: monitor.pixel_density(),
            dimensions,
            width_cm: dimensions.width_cm(),
            height_cm: dimensions.height_cm(),
        }
    }
}

/// Table row kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum SpecRowKind {
    /// Nominal diagonal.
    Diagonal,
    /// Pixel resolution.
    Resolution,
    /// Aspect ratio.
    Aspect,
    /// Pixel density.
    Density,
    /// Physical width.
    Width,
    /// Physical height.
    Height,
}

impl SpecRowKind {
    /// All rows in display order.
    pub const ALL: [Self; 6] = [
        Self::Diagonal,
        Self::Resolution,
        Self::Aspect,
        Self::Density,
        Self::Width,
        Self::Height,
    ];

    /// Row label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Diagonal => "Diagonal",
            Self::Resolution => "Resolution",
            Self::Aspect => "Aspect",
            Self::Density => "Density",
            Self::Width => "Width",
            Self::Height => "Height",
        }
    }

    /// Numeric value drawn as a bar, or `None` for text-only rows.
    fn bar_value(self, m: &MonitorMetrics) -> Option<f64> {
        match self {
            Self::Diagonal => Some(m.diagonal),
            Self::Density => Some(f64::from(m.ppi)),
            Self::Width => Some(m.dimensions.width),
            Self::Height => Some(m.dimensions.height),
            Self::Resolution | Self::Aspect => None,
        }
    }

    /// Formatted cell text.
    fn format(self, m: &MonitorMetrics) -> String {
        match self {
            Self::Diagonal => format!("{}\"", m.diagonal),
            Self::Resolution => m.resolution.to_string(),
            Self::Aspect => m.aspect_ratio.clone(),
            Self::Density => format!("{} PPI", m.ppi),
            Self::Width => format!("{:.1}\" ({:.1} cm)", m.dimensions.width, m.width_cm),
            Self::Height => format!("{:.1}\" ({:.1} cm)", m.dimensions.height, m.height_cm),
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecCell {
    /// Formatted value.
    pub text: String,
    /// Bar length as a percentage of the row maximum, for numeric rows.
    pub bar_percent: Option<f64>,
}

/// One metric across every compared monitor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecRow {
    /// Which metric this row shows.
    pub kind: SpecRowKind,
    /// One cell per monitor, in comparison order.
    pub cells: Vec<SpecCell>,
}

/// Specification table: per-monitor metrics plus formatted rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecTable {
    /// Metrics in comparison order.
    pub monitors: Vec<MonitorMetrics>,
    /// Rows in display order.
    pub rows: Vec<SpecRow>,
}

impl SpecTable {
    /// Build the table, or `None` when there is nothing to compare.
    #[must_use]
    pub fn build(monitors: &[MonitorConfiguration]) -> Option<Self> {
        if monitors.is_empty() {
            return None;
        }
        let metrics: Vec<MonitorMetrics> = monitors.iter().map(MonitorMetrics::compute).collect();

        let rows = SpecRowKind::ALL
            .iter()
            .map(|&kind| {
                let max = metrics
                    .iter()
                    .filter_map(|m| kind.bar_value(m))
                    .fold(0.0_f64, f64::max);
                let cells = metrics
                    .iter()
                    .map(|m| SpecCell {
                        text: kind.format(m),
                        bar_percent: kind.bar_value(m).map(|v| v / max * 100.0),
                    })
                    .collect();
                SpecRow { kind, cells }
            })
            .collect();

        Some(Self {
            monitors: metrics,
            rows,
        })
    }

    /// Look up a row by kind.
    #[must_use]
    pub fn row(&self, kind: SpecRowKind) -> Option<&SpecRow> {
        self.rows.iter().find(|r| r.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{PALETTE, find_preset};

    fn preset(name: &str) -> MonitorConfiguration {
        find_preset(name).unwrap().to_configuration(PALETTE[0])
    }

    #[test]
    fn test_empty_table() {
        assert!(SpecTable::build(&[]).is_none());
    }

    #[test]
    fn test_metrics_for_4k_27() {
        let metrics = MonitorMetrics::compute(&preset("4K 27"));
        assert_eq!(metrics.ppi, 163);
        assert_eq!(metrics.aspect_ratio, "16:9");
        assert_eq!(metrics.width_cm, metrics.dimensions.width * 2.54);
        assert!((metrics.width_cm - 59.77).abs() < 0.01);
    }

    #[test]
    fn test_rows_in_display_order() {
        let table = SpecTable::build(&[preset("Full HD 24")]).unwrap();
        let labels: Vec<&str> = table.rows.iter().map(|r| r.kind.label()).collect();
        assert_eq!(
            labels,
            vec!["Diagonal", "Resolution", "Aspect", "Density", "Width", "Height"]
        );
    }

    #[test]
    fn test_cell_text() {
        let table = SpecTable::build(&[preset("Ultrawide 34")]).unwrap();
        let text = |kind| table.row(kind).unwrap().cells[0].text.clone();

        assert_eq!(text(SpecRowKind::Diagonal), "34\"");
        assert_eq!(text(SpecRowKind::Resolution), "3440x1440");
        assert_eq!(text(SpecRowKind::Aspect), "21:9");
        assert_eq!(text(SpecRowKind::Density), "110 PPI");
        assert_eq!(text(SpecRowKind::Width), "31.3\" (79.4 cm)");
        assert_eq!(text(SpecRowKind::Height), "13.4\" (34.0 cm)");
    }

    #[test]
    fn test_bars_relative_to_row_maximum() {
        let table = SpecTable::build(&[preset("4K 27"), preset("OLED 55")]).unwrap();

        let density = table.row(SpecRowKind::Density).unwrap();
        assert_eq!(density.cells[0].bar_percent, Some(100.0));
        let expected = 80.0 / 163.0 * 100.0;
        assert_eq!(density.cells[1].bar_percent, Some(expected));

        let diagonal = table.row(SpecRowKind::Diagonal).unwrap();
        assert_eq!(diagonal.cells[1].bar_percent, Some(100.0));
        assert_eq!(diagonal.cells[0].bar_percent, Some(27.0 / 55.0 * 100.0));

        // Text-only rows have no bars
        assert!(table.row(SpecRowKind::Resolution).unwrap().cells.iter().all(|c| c.bar_percent.is_none()));
        assert!(table.row(SpecRowKind::Aspect).unwrap().cells.iter().all(|c| c.bar_percent.is_none()));
    }
}
