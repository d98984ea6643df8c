//! Configuration management for monsize.
//!
//! Parses `monsize.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support `~`, `${VAR}` (error if unset) and `${VAR:-default}`.
//!
//! Expanded fields:
//! - `state.dir`
//! - `catalog.path`

mod expand;

use monsize_calc::Viewport;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upper bound for the catalog comparison capacity.
pub const MAX_CATALOG_CAPACITY: usize = 4;

/// Upper bound for the size tool capacity.
pub const MAX_SIZE_TOOL_CAPACITY: usize = 6;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override state directory.
    pub state_dir: Option<PathBuf>,
    /// Override catalog file.
    pub catalog: Option<PathBuf>,
    /// Override viewport width.
    pub viewport_width: Option<f64>,
    /// Override viewport height.
    pub viewport_height: Option<f64>,
    /// Override viewport margin.
    pub margin: Option<f64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "monsize.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drawing area for size comparisons.
    pub viewport: ViewportConfig,
    /// Comparison limits.
    pub comparison: ComparisonConfig,
    /// State directory (path as written in TOML).
    state: StateConfigRaw,
    /// Catalog source (path as written in TOML).
    catalog: CatalogConfigRaw,

    /// Resolved state configuration (set after loading).
    #[serde(skip)]
    pub state_resolved: StateConfig,
    /// Resolved catalog configuration (set after loading).
    #[serde(skip)]
    pub catalog_resolved: CatalogConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Viewport configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in abstract units.
    pub width: f64,
    /// Height in abstract units.
    pub height: f64,
    /// Fraction of the fitted scale to use, in `(0, 1]`.
    pub margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            width: viewport.width,
            height: viewport.height,
            margin: viewport.margin,
        }
    }
}

impl ViewportConfig {
    /// Viewport for the calculator.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_margin(self.margin)
    }
}

/// Comparison limits.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Maximum monitors in a catalog comparison.
    pub capacity: usize,
    /// Maximum monitors in a size comparison.
    pub size_tool_capacity: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CATALOG_CAPACITY,
            size_tool_capacity: MAX_SIZE_TOOL_CAPACITY,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StateConfigRaw {
    dir: Option<String>,
}

/// Resolved state configuration with absolute paths.
#[derive(Debug, Default)]
pub struct StateConfig {
    /// Directory holding persisted comparison state.
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CatalogConfigRaw {
    path: Option<String>,
}

/// Resolved catalog configuration.
#[derive(Debug, Default)]
pub struct CatalogConfig {
    /// Catalog export to read monitors from, if configured.
    pub path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`catalog.path`").
        field: String,
        /// Error message (e.g., "${`MONSIZE_CATALOG`} not set").
        message: String,
    },
}

/// Require a number to be positive and finite.
fn require_positive(value: f64, field: &str) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

/// Require a capacity in `1..=max`.
fn require_capacity(value: usize, max: usize, field: &str) -> Result<(), ConfigError> {
    if value == 0 || value > max {
        return Err(ConfigError::Validation(format!(
            "{field} must be between 1 and {max}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `monsize.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, then the
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(state_dir) = &settings.state_dir {
            self.state_resolved.dir.clone_from(state_dir);
        }
        if let Some(catalog) = &settings.catalog {
            self.catalog_resolved.path = Some(catalog.clone());
        }
        if let Some(width) = settings.viewport_width {
            self.viewport.width = width;
        }
        if let Some(height) = settings.viewport_height {
            self.viewport.height = height;
        }
        if let Some(margin) = settings.margin {
            self.viewport.margin = margin;
        }
    }

    /// Get the configured catalog path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no catalog is configured.
    pub fn require_catalog(&self) -> Result<&Path, ConfigError> {
        self.catalog_resolved.path.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "no catalog configured: set [catalog] path or pass --catalog".to_owned(),
            )
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            viewport: ViewportConfig::default(),
            comparison: ComparisonConfig::default(),
            state: StateConfigRaw::default(),
            catalog: CatalogConfigRaw::default(),
            state_resolved: StateConfig {
                dir: base.join(".monsize"),
            },
            catalog_resolved: CatalogConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_viewport()?;
        self.validate_comparison()?;
        Ok(())
    }

    /// Validate viewport configuration.
    fn validate_viewport(&self) -> Result<(), ConfigError> {
        require_positive(self.viewport.width, "viewport.width")?;
        require_positive(self.viewport.height, "viewport.height")?;

        let margin = self.viewport.margin;
        if !margin.is_finite() || margin <= 0.0 || margin > 1.0 {
            return Err(ConfigError::Validation(
                "viewport.margin must be greater than 0 and at most 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate comparison limits.
    fn validate_comparison(&self) -> Result<(), ConfigError> {
        require_capacity(
            self.comparison.capacity,
            MAX_CATALOG_CAPACITY,
            "comparison.capacity",
        )?;
        require_capacity(
            self.comparison.size_tool_capacity,
            MAX_SIZE_TOOL_CAPACITY,
            "comparison.size_tool_capacity",
        )?;
        Ok(())
    }

    /// Expand environment variable references in path strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.state.dir {
            self.state.dir = Some(expand::expand_env(dir, "state.dir")?);
        }
        if let Some(ref path) = self.catalog.path {
            self.catalog.path = Some(expand::expand_env(path, "catalog.path")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.state_resolved = StateConfig {
            dir: config_dir.join(self.state.dir.as_deref().unwrap_or(".monsize")),
        };
        self.catalog_resolved = CatalogConfig {
            path: self.catalog.path.as_deref().map(|p| config_dir.join(p)),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.viewport.width, 1120.0);
        assert_eq!(config.viewport.height, 400.0);
        assert_eq!(config.viewport.margin, 0.9);
        assert_eq!(config.comparison.capacity, 4);
        assert_eq!(config.comparison.size_tool_capacity, 6);
        assert_eq!(config.state_resolved.dir, PathBuf::from("/test/.monsize"));
        assert!(config.catalog_resolved.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.viewport.width, 1120.0);
        assert_eq!(config.comparison.capacity, 4);
    }

    #[test]
    fn test_parse_viewport_config() {
        let toml = r"
[viewport]
width = 800
height = 600
margin = 0.75
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.viewport.viewport(), Viewport::new(800.0, 600.0).with_margin(0.75));
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[state]
dir = "var/monsize"

[catalog]
path = "data/catalog.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.state_resolved.dir, PathBuf::from("/project/var/monsize"));
        assert_eq!(
            config.catalog_resolved.path,
            Some(PathBuf::from("/project/data/catalog.json"))
        );
    }

    #[test]
    fn test_absolute_paths_kept() {
        let toml = r#"
[catalog]
path = "/srv/catalog.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.catalog_resolved.path,
            Some(PathBuf::from("/srv/catalog.json"))
        );
    }

    #[test]
    fn test_load_from_file_expands_env() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[state]
dir = "${MONSIZE_TEST_UNSET_STATE:-state}"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path()), None).unwrap();
        assert_eq!(config.state_resolved.dir, tmp.path().join("state"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_reports_unset_env() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[catalog]\npath = \"${MONSIZE_TEST_UNSET_CATALOG}\"\n").unwrap();

        let err = Config::load(Some(path.as_path()), None).unwrap_err();
        assert!(
            matches!(err, ConfigError::EnvVar { ref field, .. } if field == "catalog.path"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/monsize.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            state_dir: Some(PathBuf::from("/custom/state")),
            catalog: Some(PathBuf::from("/custom/catalog.json")),
            margin: Some(0.5),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.state_resolved.dir, PathBuf::from("/custom/state"));
        assert_eq!(config.require_catalog().unwrap(), Path::new("/custom/catalog.json"));
        assert_eq!(config.viewport.margin, 0.5);
        assert_eq!(config.viewport.width, 1120.0); // Unchanged
    }

    #[test]
    fn test_require_catalog_missing() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.require_catalog().unwrap_err();
        assert!(err.to_string().contains("catalog"));
    }

    #[test]
    fn test_validate_viewport() {
        for (width, height, margin) in [(0.0, 400.0, 0.9), (1120.0, -1.0, 0.9), (1120.0, 400.0, 0.0), (1120.0, 400.0, 1.5), (f64::NAN, 400.0, 0.9)] {
            let mut config = Config::default_with_base(Path::new("/test"));
            config.viewport = ViewportConfig { width, height, margin };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "got {err:?}");
        }

        let mut config = Config::default_with_base(Path::new("/test"));
        config.viewport.margin = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_capacity() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.comparison.capacity = 5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("comparison.capacity"));

        config.comparison.capacity = 2;
        config.comparison.size_tool_capacity = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("comparison.size_tool_capacity"));
    }
}
