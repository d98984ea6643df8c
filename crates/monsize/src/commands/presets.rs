//! `monsize presets` command implementation.

use clap::Args;
use monsize_calc::{MonitorPreset, PRESETS, Resolution, physical_dimensions, pixel_density};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the presets command.
#[derive(Args)]
pub(crate) struct PresetsArgs {
    /// Print presets as JSON.
    #[arg(long)]
    json: bool,
}

/// One preset with its derived metrics.
#[derive(Debug, Serialize)]
struct PresetSummary {
    name: &'static str,
    diagonal: f64,
    resolution: Resolution,
    aspect_ratio: String,
    width: f64,
    height: f64,
    ppi: u32,
}

impl PresetSummary {
    fn new(preset: &MonitorPreset) -> Self {
        let diagonal = preset.diagonal.inches();
        let dims = physical_dimensions(diagonal, preset.aspect_ratio);
        Self {
            name: preset.name,
            diagonal,
            resolution: preset.resolution,
            aspect_ratio: preset.aspect_ratio.to_string(),
            width: dims.width,
            height: dims.height,
            ppi: pixel_density(preset.resolution, diagonal),
        }
    }

    fn line(&self) -> String {
        format!(
            "{:<22}{:>11}  {:<5}  {:>5.1}\" x {:>4.1}\"  {:>3} PPI",
            self.name,
            self.resolution.to_string(),
            self.aspect_ratio,
            self.width,
            self.height,
            self.ppi
        )
    }
}

impl PresetsArgs {
    /// Execute the presets command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let summaries: Vec<PresetSummary> = PRESETS.iter().map(PresetSummary::new).collect();

        if self.json {
            output.line(&serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        for summary in &summaries {
            output.line(&summary.line());
        }
        Ok(())
    }
}
