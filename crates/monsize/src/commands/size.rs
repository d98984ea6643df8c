//! `monsize size` command implementation.

use std::path::Path;

use clap::Args;
use monsize_calc::{
    Layout, MonitorConfiguration, SpecTable, color_for_index, find_preset, layout_comparison,
};
use monsize_compare::{AddOutcome, ComparisonSet};
use monsize_config::{CliSettings, Config};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;
use crate::render;

/// Arguments for the size command.
#[derive(Args)]
pub(crate) struct SizeArgs {
    /// Preset names, e.g. "4K 27" (see `monsize presets`).
    presets: Vec<String>,

    /// Custom monitor as "name;diagonal;WxH;W:H", e.g. "Desk;27;2560x1440;16:9".
    #[arg(long = "custom", value_name = "SPEC")]
    custom: Vec<String>,

    /// Viewport width (overrides config).
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height (overrides config).
    #[arg(long)]
    height: Option<f64>,

    /// Fraction of the viewport to fill, in (0, 1] (overrides config).
    #[arg(long)]
    margin: Option<f64>,

    /// Print the spec table and layout as JSON.
    #[arg(long)]
    json: bool,
}

/// Machine-readable size comparison.
#[derive(Serialize)]
struct SizeReport<'a> {
    table: Option<&'a SpecTable>,
    layout: &'a Layout,
}

impl SizeArgs {
    /// Execute the size command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            viewport_width: self.width,
            viewport_height: self.height,
            margin: self.margin,
            ..Default::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;

        let monitors = collect_monitors(
            &self.presets,
            &self.custom,
            config.comparison.size_tool_capacity,
            &output,
        );
        let table = SpecTable::build(&monitors);
        let layout = layout_comparison(&monitors, config.viewport.viewport());

        if self.json {
            let report = SizeReport {
                table: table.as_ref(),
                layout: &layout,
            };
            output.line(&serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let Some(table) = table else {
            output.note(render::EMPTY_PLACEHOLDER);
            return Ok(());
        };

        for line in render::spec_table(&table) {
            output.line(&line);
        }
        output.separator();
        for line in render::layout_canvas(&layout, render::CANVAS_COLUMNS) {
            output.line(&line);
        }
        Ok(())
    }
}

/// Build the comparison from presets then custom descriptions, in argument
/// order. Unknown presets and malformed descriptions are skipped with a
/// warning, as are monitors beyond `capacity`.
fn collect_monitors(
    presets: &[String],
    custom: &[String],
    capacity: usize,
    output: &Output,
) -> Vec<MonitorConfiguration> {
    let mut set = ComparisonSet::new(capacity);

    let candidates = presets
        .iter()
        .map(|name| {
            find_preset(name)
                .map(|p| p.to_configuration(color_for_index(0)))
                .ok_or_else(|| format!("Unknown preset: {name}"))
        })
        .chain(custom.iter().map(|spec| {
            MonitorConfiguration::from_spec(spec, color_for_index(0))
                .map_err(|e| format!("Skipping custom monitor: {e}"))
        }));

    for candidate in candidates {
        let monitor = match candidate {
            Ok(monitor) => monitor,
            Err(message) => {
                output.warning(&message);
                continue;
            }
        };
        let name = monitor.name().to_owned();
        let color = color_for_index(set.len());
        if set.add(monitor.with_color(color)) == AddOutcome::Full {
            output.warning(&format!(
                "Skipping {name}: at most {capacity} monitors can be compared"
            ));
        }
    }

    tracing::info!(monitors = set.len(), "collected size comparison");
    set.items().to_vec()
}

#[cfg(test)]
mod tests {
    use monsize_calc::PALETTE;
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(monitors: &[MonitorConfiguration]) -> Vec<&str> {
        monitors.iter().map(MonitorConfiguration::name).collect()
    }

    #[test]
    fn test_collect_presets_and_custom() {
        let monitors = collect_monitors(
            &["4k 27".to_owned(), "nope".to_owned()],
            &["Desk;24\";1920x1200;16:10".to_owned(), "broken".to_owned()],
            6,
            &Output::new(),
        );

        assert_eq!(names(&monitors), vec!["4K 27\"", "Desk"]);
        assert_eq!(monitors[0].color(), PALETTE[0]);
        assert_eq!(monitors[1].color(), PALETTE[1]);
        assert_eq!(monitors[1].pixel_density(), 94);
    }

    #[test]
    fn test_collect_respects_capacity() {
        let presets: Vec<String> = ["Full HD 24", "QHD 27", "4K 32"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        let monitors = collect_monitors(&presets, &[], 2, &Output::new());
        assert_eq!(names(&monitors), vec!["Full HD 24\"", "QHD 27\""]);
    }

    #[test]
    fn test_same_preset_twice_is_two_monitors() {
        let presets = vec!["QHD 27".to_owned(), "QHD 27".to_owned()];
        let monitors = collect_monitors(&presets, &[], 6, &Output::new());
        assert_eq!(monitors.len(), 2);
        assert_ne!(monitors[0].id(), monitors[1].id());
    }

    #[test]
    fn test_report_json_for_empty_comparison() {
        let report = SizeReport {
            table: None,
            layout: &Layout::Empty,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "table": null, "layout": { "kind": "empty" } }));
    }
}
