//! `monsize compare` subcommand group.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use monsize_calc::{SpecTable, layout_comparison};
use monsize_compare::{
    AddOutcome, COMPARISON_KEY, Catalog, CatalogMonitor, FeatureTable, FileStore, GamutChart,
    MIN_COMPARISON, MetricChart, PersistentComparison, catalog_charts, configurations,
};
use serde::Serialize;
use monsize_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;
use crate::render;

/// Arguments for the compare command group.
#[derive(Args)]
pub(crate) struct CompareArgs {
    /// Catalog JSON export (overrides config).
    #[arg(long, env = "MONSIZE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Directory for comparison state (overrides config).
    #[arg(long)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    action: CompareCommand,
}

/// Catalog comparison commands.
#[derive(Subcommand)]
enum CompareCommand {
    /// Add a catalog monitor by slug.
    Add {
        /// Monitor slug.
        slug: String,
    },
    /// Remove a monitor by slug.
    Remove {
        /// Monitor slug.
        slug: String,
    },
    /// Show the compared monitors side by side.
    List,
    /// Remove every monitor.
    Clear,
    /// Show per-metric bar charts.
    Charts {
        /// Print charts as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl CompareArgs {
    /// Execute the compare subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the catalog cannot be read,
    /// or a slug is not in the catalog.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            state_dir: self.state_dir,
            catalog: self.catalog,
            ..Default::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;

        // Opening the store may wipe the directory, so the .gitignore comes after
        let store = FileStore::new(config.state_resolved.dir.clone());
        ensure_state_dir(store.root())?;
        let mut comparison: PersistentComparison<CatalogMonitor> =
            PersistentComparison::open(Box::new(store), COMPARISON_KEY, config.comparison.capacity);

        match self.action {
            CompareCommand::Add { slug } => {
                let catalog = Catalog::load(config.require_catalog()?)?;
                add(&mut comparison, &catalog, &slug, &output)
            }
            CompareCommand::Remove { slug } => {
                remove(&mut comparison, &slug, &output);
                Ok(())
            }
            CompareCommand::List => {
                list(&comparison, &config, &output);
                Ok(())
            }
            CompareCommand::Clear => {
                comparison.clear();
                output.success("Comparison cleared");
                Ok(())
            }
            CompareCommand::Charts { json } => charts(&comparison, json, &output),
        }
    }
}

fn add(
    comparison: &mut PersistentComparison<CatalogMonitor>,
    catalog: &Catalog,
    slug: &str,
    output: &Output,
) -> Result<(), CliError> {
    let monitor = catalog
        .get(slug)
        .ok_or_else(|| CliError::Validation(format!("No monitor with slug '{slug}' in catalog")))?;
    let name = monitor.name.clone();

    match comparison.add(monitor.clone()) {
        AddOutcome::Added => output.success(&format!(
            "Added {name} ({}/{})",
            comparison.set().len(),
            comparison.set().capacity()
        )),
        AddOutcome::AlreadyPresent => output.info(&format!("{name} is already in the comparison")),
        AddOutcome::Full => output.warning(&format!(
            "Comparison is full ({} monitors). Remove one before adding {name}.",
            comparison.set().capacity()
        )),
    }
    Ok(())
}

fn remove(comparison: &mut PersistentComparison<CatalogMonitor>, slug: &str, output: &Output) {
    let found = comparison
        .items()
        .iter()
        .find(|m| m.slug == slug)
        .map(|m| (m.id.clone(), m.name.clone()));

    match found {
        Some((id, name)) => {
            comparison.remove(&id);
            output.success(&format!("Removed {name}"));
        }
        None => output.info(&format!("'{slug}' is not in the comparison")),
    }
}

fn not_ready_note() -> String {
    format!(
        "Add at least {MIN_COMPARISON} monitors to your comparison list to see them side by side."
    )
}

fn list(comparison: &PersistentComparison<CatalogMonitor>, config: &Config, output: &Output) {
    let monitors = configurations(comparison.items());
    let (true, Some(table), Some(features)) = (
        comparison.is_ready(),
        SpecTable::build(&monitors),
        FeatureTable::build(comparison.items()),
    ) else {
        output.note(&not_ready_note());
        return;
    };

    for line in render::spec_table(&table) {
        output.line(&line);
    }
    output.separator();

    output.heading("Features");
    for line in render::feature_table(&features) {
        output.line(&line);
    }
    output.separator();

    let layout = layout_comparison(&monitors, config.viewport.viewport());
    for line in render::layout_canvas(&layout, render::CANVAS_COLUMNS) {
        output.line(&line);
    }
}

/// Everything `compare charts` shows. Empty until enough monitors are compared.
#[derive(Debug, Serialize)]
struct ChartsReport {
    charts: Vec<MetricChart>,
    gamut: Option<GamutChart>,
}

impl ChartsReport {
    fn build(comparison: &PersistentComparison<CatalogMonitor>) -> Self {
        if !comparison.is_ready() {
            return Self {
                charts: Vec::new(),
                gamut: None,
            };
        }
        Self {
            charts: catalog_charts(comparison.items()),
            gamut: GamutChart::build(comparison.items()),
        }
    }
}

fn charts(
    comparison: &PersistentComparison<CatalogMonitor>,
    json: bool,
    output: &Output,
) -> Result<(), CliError> {
    let report = ChartsReport::build(comparison);

    if json {
        output.line(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !comparison.is_ready() {
        output.note(&not_ready_note());
        return Ok(());
    }
    let mut blocks: Vec<Vec<String>> = report.charts.iter().map(render::metric_chart).collect();
    blocks.extend(report.gamut.as_ref().map(render::gamut_chart));
    if blocks.is_empty() {
        output.note("None of the compared monitors has chartable values.");
        return Ok(());
    }
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            output.line("");
        }
        for line in block {
            output.line(line);
        }
    }
    Ok(())
}

/// Ensure the state directory exists with a `.gitignore`.
fn ensure_state_dir(state_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(state_dir)?;

    let gitignore_path = state_dir.join(".gitignore");
    if !gitignore_path.exists() {
        let _ = std::fs::write(&gitignore_path, "# Automatically created by monsize\n*\n");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use monsize_compare::{CATALOG_CAPACITY, NullStore};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const CATALOG_JSON: &str = r#"[
        { "_id": "a", "name": "Alpha", "slug": "alpha", "screenSize": 27,
          "resolution": "2560x1440", "panelType": "IPS", "refreshRate": 165 },
        { "_id": "b", "name": "Beta", "slug": "beta", "screenSize": 32,
          "resolution": "3840x2160", "panelType": "OLED", "refreshRate": 240 }
    ]"#;

    fn comparison() -> PersistentComparison<CatalogMonitor> {
        PersistentComparison::open(Box::new(NullStore), COMPARISON_KEY, CATALOG_CAPACITY)
    }

    #[test]
    fn test_add_and_remove_by_slug() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let output = Output::new();
        let mut cmp = comparison();

        add(&mut cmp, &catalog, "beta", &output).unwrap();
        add(&mut cmp, &catalog, "alpha", &output).unwrap();
        add(&mut cmp, &catalog, "beta", &output).unwrap();
        let ids: Vec<&str> = cmp.items().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        remove(&mut cmp, "beta", &output);
        remove(&mut cmp, "beta", &output);
        assert!(!cmp.contains("b"));
        assert!(cmp.contains("a"));
    }

    #[test]
    fn test_add_unknown_slug() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let err = add(&mut comparison(), &catalog, "gamma", &Output::new()).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("gamma"));
    }

    #[test]
    fn test_charts_need_two_monitors() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let output = Output::new();
        let mut cmp = comparison();

        add(&mut cmp, &catalog, "alpha", &output).unwrap();
        let report = ChartsReport::build(&cmp);
        assert!(report.charts.is_empty());
        assert!(report.gamut.is_none());
        assert_eq!(
            not_ready_note(),
            "Add at least 2 monitors to your comparison list to see them side by side."
        );

        add(&mut cmp, &catalog, "beta", &output).unwrap();
        let report = ChartsReport::build(&cmp);
        let titles: Vec<&str> = report.charts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Refresh Rate", "Screen Size"]);
        // Neither record carries gamut data
        assert!(report.gamut.is_none());
    }

    #[test]
    fn test_ensure_state_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".monsize");

        ensure_state_dir(&dir).unwrap();
        assert!(dir.is_dir());
        let gitignore = std::fs::read_to_string(dir.join(".gitignore")).unwrap();
        assert!(gitignore.contains('*'));

        std::fs::write(dir.join(".gitignore"), "custom\n").unwrap();
        ensure_state_dir(&dir).unwrap();
        assert_eq!(std::fs::read_to_string(dir.join(".gitignore")).unwrap(), "custom\n");
    }
}
