//! Monitor catalog records.
//!
//! Catalog records come from a content store export: a JSON array of monitor
//! documents in camelCase with the document id under `_id`. Only the fields
//! used for comparison are modelled; anything else in the export is ignored.

use std::path::{Path, PathBuf};

use monsize_calc::{
    AspectRatio, CalcError, DisplayColor, MonitorConfiguration, MonitorInput, validate_all,
};
use serde::{Deserialize, Serialize};

use crate::Comparable;

/// Brand reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Brand name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// Colour gamut coverage percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColourGamut {
    /// sRGB coverage.
    pub srgb: Option<f64>,
    /// Adobe RGB coverage.
    pub adobe_rgb: Option<f64>,
    /// DCI-P3 coverage.
    pub dcip3: Option<f64>,
}

/// Video or data port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Port type, e.g. `HDMI`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Number of ports of this type.
    pub count: u32,
    /// Version, e.g. `2.1`.
    pub version: Option<String>,
}

/// A monitor document from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMonitor {
    /// Document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Product name.
    pub name: String,
    /// URL slug, unique within the catalog.
    pub slug: String,
    /// Diagonal in inches.
    pub screen_size: f64,
    /// Resolution as `WxH`.
    pub resolution: String,
    /// Panel technology, e.g. `IPS`.
    pub panel_type: String,
    /// Refresh rate in Hz.
    pub refresh_rate: f64,
    /// Grey-to-grey response time in ms.
    pub response_time: Option<f64>,
    /// Aspect ratio as `W:H`.
    pub aspect_ratio: Option<String>,
    /// Whether the panel is curved.
    #[serde(default)]
    pub curved: bool,
    /// Curve radius, e.g. `1800R`.
    pub curve_radius: Option<String>,
    /// Supported HDR formats.
    #[serde(default)]
    pub hdr_support: Vec<String>,
    /// Colour gamut coverage.
    pub colour_gamut: Option<ColourGamut>,
    /// Peak brightness in nits.
    pub brightness: Option<f64>,
    /// Contrast ratio, e.g. `1000:1`.
    pub contrast_ratio: Option<String>,
    /// Adaptive sync technologies.
    #[serde(default)]
    pub adaptive_sync: Vec<String>,
    /// Ports.
    #[serde(default)]
    pub ports: Vec<Port>,
    /// Built-in USB hub.
    #[serde(default)]
    pub usb_hub: bool,
    /// Built-in speakers.
    #[serde(default)]
    pub speakers: bool,
    /// Stand adjustments, e.g. `Height`, `Tilt`.
    #[serde(default)]
    pub stand_adjustments: Vec<String>,
    /// VESA mount pattern.
    pub vesa_mount: Option<String>,
    /// Weight in kg.
    pub weight: Option<f64>,
    /// Launch price.
    pub msrp: Option<f64>,
    /// Brand.
    pub brand: Option<Brand>,
}

impl CatalogMonitor {
    /// Raw monitor input for the size calculator.
    ///
    /// A record without an aspect ratio is treated as 16:9.
    #[must_use]
    pub fn monitor_input(&self) -> MonitorInput {
        MonitorInput {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            diagonal: self.screen_size,
            resolution: self.resolution.clone(),
            aspect_ratio: self
                .aspect_ratio
                .clone()
                .unwrap_or_else(|| AspectRatio::WIDESCREEN.to_string()),
        }
    }

    /// Validate into a calculator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError`] if the record's size, resolution or aspect ratio is malformed.
    pub fn to_configuration(&self, color: DisplayColor) -> Result<MonitorConfiguration, CalcError> {
        self.monitor_input().validate(color)
    }
}

impl Comparable for CatalogMonitor {
    fn comparison_id(&self) -> &str {
        &self.id
    }
}

/// Configurations for a list of catalog records, omitting malformed ones.
#[must_use]
pub fn configurations<'a>(
    monitors: impl IntoIterator<Item = &'a CatalogMonitor>,
) -> Vec<MonitorConfiguration> {
    let inputs: Vec<MonitorInput> = monitors.into_iter().map(CatalogMonitor::monitor_input).collect();
    validate_all(&inputs)
}

/// Catalog loading error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        /// Catalog path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Catalog is not a JSON array of monitor records.
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory monitor catalog, keyed by slug.
#[derive(Debug, Default)]
pub struct Catalog {
    monitors: Vec<CatalogMonitor>,
}

impl Catalog {
    /// Wrap already loaded records.
    #[must_use]
    pub fn new(monitors: Vec<CatalogMonitor>) -> Self {
        Self { monitors }
    }

    /// Load a catalog export from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), monitors = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog export.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if `json` is not an array of monitor records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Record with the given slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&CatalogMonitor> {
        self.monitors.iter().find(|m| m.slug == slug)
    }

    /// All records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogMonitor> {
        self.monitors.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Whether the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}
