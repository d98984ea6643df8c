//! Per-metric bar charts for a catalog comparison.

use serde::Serialize;

use crate::CatalogMonitor;

/// Bar colours, assigned by position among the monitors that have a value.
pub const CHART_COLORS: [&str; 4] = ["#00e0ff", "#ff6b6b", "#feca57", "#48dbfb"];

/// Colour of a bar holding the best value.
pub const BEST_COLOR: &str = "#00e0ff";

/// Longest monitor name shown on a chart axis before it is cut.
pub const MAX_LABEL_CHARS: usize = 15;

/// Colour for the `index`-th charted monitor.
#[must_use]
pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Axis label for a monitor name: at most [`MAX_LABEL_CHARS`] characters,
/// followed by `...` when cut.
#[must_use]
pub fn chart_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let cut: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{cut}...")
    } else {
        name.to_owned()
    }
}

/// Whether larger values are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Larger is better (refresh rate, brightness).
    HigherIsBetter,
    /// Smaller is better (response time, price).
    LowerIsBetter,
}

impl Direction {
    /// Caption shown under a chart.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::HigherIsBetter => "Higher is better",
            Self::LowerIsBetter => "Lower is better",
        }
    }
}

/// One input value for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    /// Monitor name.
    pub name: String,
    /// Metric value.
    pub value: f64,
    /// Bar colour as a hex string.
    pub color: &'static str,
}

/// One drawn bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    /// Monitor name.
    pub name: String,
    /// Metric value.
    pub value: f64,
    /// Bar colour as a hex string.
    pub color: &'static str,
    /// Whether this bar holds the best value. Ties are all marked.
    pub is_best: bool,
}

impl ChartBar {
    /// Colour to draw: [`BEST_COLOR`] for best bars, the bar's own otherwise.
    #[must_use]
    pub fn fill(&self) -> &'static str {
        if self.is_best { BEST_COLOR } else { self.color }
    }
}

/// A bar chart of one metric across monitors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricChart {
    /// Chart title.
    pub title: String,
    /// Unit suffix, e.g. `Hz`.
    pub unit: String,
    /// Which end of the scale is better.
    pub direction: Direction,
    /// Axis upper bound: the largest value plus 10%, rounded up.
    pub axis_max: f64,
    /// Best value among the bars.
    pub best: f64,
    /// Bars in input order.
    pub bars: Vec<ChartBar>,
}

impl MetricChart {
    /// Build a chart. Entries with a value of zero or less are left out;
    /// returns `None` if nothing is left.
    #[must_use]
    pub fn build(
        title: impl Into<String>,
        unit: impl Into<String>,
        direction: Direction,
        entries: impl IntoIterator<Item = ChartEntry>,
    ) -> Option<Self> {
        let valid: Vec<ChartEntry> = entries.into_iter().filter(|e| e.value > 0.0).collect();
        if valid.is_empty() {
            return None;
        }

        let max = valid.iter().map(|e| e.value).fold(f64::MIN, f64::max);
        let best = match direction {
            Direction::HigherIsBetter => max,
            Direction::LowerIsBetter => valid.iter().map(|e| e.value).fold(f64::MAX, f64::min),
        };

        #[allow(clippy::float_cmp)]
        let bars = valid
            .into_iter()
            .map(|e| ChartBar {
                is_best: e.value == best,
                name: e.name,
                value: e.value,
                color: e.color,
            })
            .collect();

        Some(Self {
            title: title.into(),
            unit: unit.into(),
            direction,
            axis_max: (max * 1.1).ceil(),
            best,
            bars,
        })
    }
}

/// Catalog fields that get a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMetric {
    /// Refresh rate in Hz.
    RefreshRate,
    /// Response time in ms.
    ResponseTime,
    /// Diagonal in inches.
    ScreenSize,
    /// Peak brightness in nits.
    Brightness,
    /// Launch price.
    Price,
}

impl CatalogMetric {
    /// Charts in display order.
    pub const ALL: [Self; 5] = [
        Self::RefreshRate,
        Self::ResponseTime,
        Self::ScreenSize,
        Self::Brightness,
        Self::Price,
    ];

    /// Chart title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::RefreshRate => "Refresh Rate",
            Self::ResponseTime => "Response Time",
            Self::ScreenSize => "Screen Size",
            Self::Brightness => "Peak Brightness",
            Self::Price => "Price",
        }
    }

    /// Unit suffix.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::RefreshRate => "Hz",
            Self::ResponseTime => "ms",
            Self::ScreenSize => "\"",
            Self::Brightness => " nits",
            Self::Price => "",
        }
    }

    /// Which end of the scale is better.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::RefreshRate | Self::ScreenSize | Self::Brightness => Direction::HigherIsBetter,
            Self::ResponseTime | Self::Price => Direction::LowerIsBetter,
        }
    }

    /// The metric's value for a record, if the record has one.
    #[must_use]
    pub fn value(self, monitor: &CatalogMonitor) -> Option<f64> {
        match self {
            Self::RefreshRate => Some(monitor.refresh_rate),
            Self::ResponseTime => monitor.response_time,
            Self::ScreenSize => Some(monitor.screen_size),
            Self::Brightness => monitor.brightness,
            Self::Price => monitor.msrp,
        }
    }

    /// Build this metric's chart.
    ///
    /// Monitors without a value are skipped before colours are assigned, so
    /// colours follow position among the charted monitors.
    #[must_use]
    pub fn chart(self, monitors: &[CatalogMonitor]) -> Option<MetricChart> {
        let entries = monitors
            .iter()
            .filter_map(|m| self.value(m).map(|value| (m, value)))
            .enumerate()
            .map(|(i, (m, value))| ChartEntry {
                name: chart_label(&m.name),
                value,
                color: chart_color(i),
            });
        MetricChart::build(self.title(), self.unit(), self.direction(), entries)
    }
}

/// Every chart that has data for the given monitors.
#[must_use]
pub fn catalog_charts(monitors: &[CatalogMonitor]) -> Vec<MetricChart> {
    CatalogMetric::ALL
        .iter()
        .filter_map(|metric| metric.chart(monitors))
        .collect()
}

/// Axes of the colour gamut chart.
pub const GAMUT_AXES: [&str; 3] = ["sRGB", "Adobe RGB", "DCI-P3"];

/// Upper bound of every gamut axis, in percent.
pub const GAMUT_AXIS_MAX: f64 = 100.0;

/// Gamut coverage of one monitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamutSeries {
    /// Axis label for the monitor.
    pub name: String,
    /// Coverage per axis in [`GAMUT_AXES`] order. Missing values are zero.
    pub values: [f64; 3],
    /// Series colour, by position in the comparison.
    pub color: &'static str,
}

/// Colour gamut coverage of every compared monitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamutChart {
    pub axes: [&'static str; 3],
    pub axis_max: f64,
    pub series: Vec<GamutSeries>,
}

impl GamutChart {
    /// Build the chart, or `None` when no monitor has any gamut value.
    #[must_use]
    pub fn build(monitors: &[CatalogMonitor]) -> Option<Self> {
        let series: Vec<GamutSeries> = monitors
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let g = m.colour_gamut.as_ref();
                let value = |v: Option<f64>| v.filter(|v| *v > 0.0).unwrap_or(0.0);
                GamutSeries {
                    name: chart_label(&m.name),
                    values: [
                        value(g.and_then(|g| g.srgb)),
                        value(g.and_then(|g| g.adobe_rgb)),
                        value(g.and_then(|g| g.dcip3)),
                    ],
                    color: chart_color(i),
                }
            })
            .collect();

        if !series.iter().any(|s| s.values.iter().any(|v| *v > 0.0)) {
            return None;
        }
        Some(Self {
            axes: GAMUT_AXES,
            axis_max: GAMUT_AXIS_MAX,
            series,
        })
    }
}
