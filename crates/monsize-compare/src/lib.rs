//! Monitor comparison state for monsize.
//!
//! This crate holds everything around a comparison that is not pure geometry:
//!
//! - [`ComparisonSet`]: bounded, ordered, id-keyed set with idempotent add/remove
//! - [`ComparisonStore`]: byte store for state that survives restarts,
//!   with [`FileStore`] and [`NullStore`] implementations
//! - [`PersistentComparison`]: a set mirrored to a store
//! - [`Catalog`] / [`CatalogMonitor`]: monitor records from a catalog export
//! - [`MetricChart`]: per-metric bar charts with best-value highlighting
//! - [`FeatureTable`] / [`GamutChart`]: side-by-side features and colour gamut coverage
//!
//! # Example
//!
//! ```
//! use monsize_compare::{AddOutcome, CATALOG_CAPACITY, NullStore, PersistentComparison, COMPARISON_KEY};
//! use monsize_compare::{Catalog, CatalogMonitor};
//!
//! let catalog = Catalog::from_json(r#"[{
//!     "_id": "a", "name": "Monitor A", "slug": "monitor-a", "screenSize": 27,
//!     "resolution": "2560x1440", "panelType": "IPS", "refreshRate": 165
//! }]"#).unwrap();
//!
//! let mut cmp: PersistentComparison<CatalogMonitor> =
//!     PersistentComparison::open(Box::new(NullStore), COMPARISON_KEY, CATALOG_CAPACITY);
//! let monitor = catalog.get("monitor-a").unwrap().clone();
//! assert_eq!(cmp.add(monitor.clone()), AddOutcome::Added);
//! assert_eq!(cmp.add(monitor), AddOutcome::AlreadyPresent);
//! ```

mod catalog;
mod chart;
mod features;
mod file;
mod persistent;
mod set;
mod store;

pub use catalog::{
    Brand, Catalog, CatalogError, CatalogMonitor, ColourGamut, Port, configurations,
};
pub use chart::{
    BEST_COLOR, CHART_COLORS, CatalogMetric, ChartBar, ChartEntry, Direction, GAMUT_AXES,
    GAMUT_AXIS_MAX, GamutChart, GamutSeries, MAX_LABEL_CHARS, MetricChart, catalog_charts,
    chart_color, chart_label,
};
pub use features::{
    Feature, FeatureRow, FeatureSection, FeatureTable, FeatureValue, MISSING,
};
pub use file::{FileStore, STATE_VERSION};
pub use persistent::{COMPARISON_KEY, PersistentComparison};
pub use set::{
    AddOutcome, CATALOG_CAPACITY, Comparable, ComparisonSet, MIN_COMPARISON, SIZE_TOOL_CAPACITY,
};
pub use store::{ComparisonStore, ComparisonStoreExt, JsonLoad, NullStore};
