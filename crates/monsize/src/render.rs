//! Plain-text rendering of spec tables, size layouts, metric charts and
//! catalog feature tables.
//!
//! Every function returns lines instead of printing so the command layer
//! decides where they go.

use monsize_calc::{Layout, SpecTable};
use monsize_compare::{FeatureSection, FeatureTable, GamutChart, MetricChart};

/// Width of a full spec table bar, in characters.
const TABLE_BAR_WIDTH: usize = 12;

/// Width of a drawn size layout, in characters.
pub(crate) const CANVAS_COLUMNS: usize = 64;

/// Width of a full chart bar, in characters.
const CHART_BAR_WIDTH: usize = 40;

/// Tallest drawn size layout, in lines.
pub(crate) const CANVAS_MAX_ROWS: usize = 32;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 0.5;

/// Width of the row label column.
const LABEL_WIDTH: usize = 12;

/// Width of the feature label column.
const FEATURE_LABEL_WIDTH: usize = 20;

/// Appended to a feature label when the monitors differ.
pub(crate) const DIFFERS_MARKER: &str = " *";

/// Shown when a size comparison has no monitors.
pub(crate) const EMPTY_PLACEHOLDER: &str = "Add monitors to compare their sizes";

/// Round a non-negative length to whole characters.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cells(length: f64) -> usize {
    length.max(0.0).round() as usize
}

/// A bar of `percent` of `width`, at least one character for any positive value.
fn bar(percent: f64, width: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let filled = cells(percent / 100.0 * width as f64).min(width);
    let filled = if percent > 0.0 { filled.max(1) } else { filled };
    "█".repeat(filled)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Side-by-side table: a header with monitor names, then one line per
/// metric and a bar line under numeric metrics.
pub(crate) fn spec_table(table: &SpecTable) -> Vec<String> {
    let widths: Vec<usize> = table
        .monitors
        .iter()
        .enumerate()
        .map(|(i, m)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| cell.text.chars().count())
                .chain([m.name.chars().count(), TABLE_BAR_WIDTH])
                .max()
                .unwrap_or(TABLE_BAR_WIDTH)
        })
        .collect();

    let join = |label: &str, columns: Vec<String>| {
        let mut line = pad(label, LABEL_WIDTH);
        for (column, width) in columns.iter().zip(&widths) {
            line.push_str("  ");
            line.push_str(&pad(column, *width));
        }
        line.trim_end().to_owned()
    };

    let mut lines = vec![join(
        "",
        table.monitors.iter().map(|m| m.name.clone()).collect(),
    )];
    for row in &table.rows {
        lines.push(join(
            row.kind.label(),
            row.cells.iter().map(|c| c.text.clone()).collect(),
        ));
        if row.cells.iter().any(|c| c.bar_percent.is_some()) {
            lines.push(join(
                "",
                row.cells
                    .iter()
                    .map(|c| c.bar_percent.map_or_else(String::new, |p| bar(p, TABLE_BAR_WIDTH)))
                    .collect(),
            ));
        }
    }
    lines
}

/// Draw a size layout as overlapping outlines anchored at the top-left
/// corner, at most `columns` characters wide and [`CANVAS_MAX_ROWS`] lines
/// tall, followed by a legend.
///
/// Each outline is drawn with the first letter of its colour name. Larger
/// monitors are drawn first so smaller ones stay visible on top.
pub(crate) fn layout_canvas(layout: &Layout, columns: usize) -> Vec<String> {
    let Layout::Scaled {
        container_width,
        container_height,
        boxes,
        ..
    } = layout
    else {
        return vec![EMPTY_PLACEHOLDER.to_owned()];
    };

    #[allow(clippy::cast_precision_loss)]
    let per_unit = (columns as f64 / container_width)
        .min(CANVAS_MAX_ROWS as f64 / (container_height * CELL_ASPECT));
    let canvas_width = cells(container_width * per_unit).max(1);
    let canvas_height = cells(container_height * per_unit * CELL_ASPECT).clamp(1, CANVAS_MAX_ROWS);
    let mut canvas = vec![vec![' '; canvas_width]; canvas_height];

    for scaled in boxes {
        let marker = scaled.color.name.chars().next().unwrap_or('#');
        let w = cells(scaled.width * per_unit).clamp(1, canvas_width);
        let h = cells(scaled.height * per_unit * CELL_ASPECT).clamp(1, canvas_height);
        for (y, row) in canvas.iter_mut().enumerate().take(h) {
            for (x, cell) in row.iter_mut().enumerate().take(w) {
                if y == 0 || y == h - 1 || x == 0 || x == w - 1 {
                    *cell = marker;
                }
            }
        }
    }

    let mut lines: Vec<String> = canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
        .collect();
    lines.push(String::new());
    for scaled in boxes {
        lines.push(format!(
            "{}  {} ({}) {:.1}\" x {:.1}\"",
            scaled.color.name.chars().next().unwrap_or('#'),
            scaled.name,
            scaled.color.name,
            scaled.dimensions.width,
            scaled.dimensions.height,
        ));
    }
    lines
}

/// A horizontal bar chart with the axis scaled to `axis_max`.
pub(crate) fn metric_chart(chart: &MetricChart) -> Vec<String> {
    let name_width = chart
        .bars
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!("{} ({})", chart.title, chart.direction.caption())];
    for b in &chart.bars {
        let mut line = format!(
            "  {}  {} {}{}",
            pad(&b.name, name_width),
            bar(b.value / chart.axis_max * 100.0, CHART_BAR_WIDTH),
            b.value,
            chart.unit
        );
        if b.is_best {
            line.push_str("  * best");
        }
        lines.push(line);
    }
    lines
}

/// Feature table grouped by section. Rows where the monitors differ are
/// marked with [`DIFFERS_MARKER`].
pub(crate) fn feature_table(table: &FeatureTable) -> Vec<String> {
    let widths: Vec<usize> = table
        .monitors
        .iter()
        .enumerate()
        .map(|(i, name)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.values.get(i))
                .map(|v| v.to_string().chars().count())
                .chain([name.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let join = |label: &str, columns: Vec<String>| {
        let mut line = pad(label, FEATURE_LABEL_WIDTH);
        for (column, width) in columns.iter().zip(&widths) {
            line.push_str("  ");
            line.push_str(&pad(column, *width));
        }
        line.trim_end().to_owned()
    };

    let mut lines = vec![join("", table.monitors.clone())];
    for section in FeatureSection::ALL {
        lines.push(String::new());
        lines.push(section.title().to_owned());
        for row in table.section(section) {
            let label = if row.all_same {
                row.feature.label().to_owned()
            } else {
                format!("{}{DIFFERS_MARKER}", row.feature.label())
            };
            lines.push(join(&label, row.values.iter().map(ToString::to_string).collect()));
        }
    }
    lines
}

/// Colour gamut coverage: one block per axis with a bar per monitor on a
/// fixed 0 to 100 scale.
pub(crate) fn gamut_chart(chart: &GamutChart) -> Vec<String> {
    let name_width = chart
        .series
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Colour Gamut Coverage".to_owned()];
    for (axis, label) in chart.axes.iter().enumerate() {
        lines.push(format!("  {label}"));
        for series in &chart.series {
            let value = series.values[axis];
            lines.push(format!(
                "    {}  {} {value}%",
                pad(&series.name, name_width),
                bar(value / chart.axis_max * 100.0, CHART_BAR_WIDTH),
            ));
        }
    }
    lines
}
