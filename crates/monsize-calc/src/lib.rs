//! Physical dimension and comparison metric calculator for monitors.
//!
//! Given a diagonal and an aspect ratio this crate computes a panel's physical
//! width and height; given a resolution it computes pixel density; and given a
//! set of monitors it computes one shared scale factor so they can be drawn
//! proportionally inside a bounded viewport.
//!
//! # Architecture
//!
//! - [`physical_dimensions`], [`pixel_density`], [`inches_to_cm`]: pure numeric core
//! - [`shared_scale_factor`], [`layout_comparison`]: proportional drawing
//! - [`SpecTable`]: side-by-side metrics with relative bar lengths
//! - [`MonitorConfiguration`], [`MonitorInput`]: validated input at the boundary
//! - [`PRESETS`], [`PALETTE`]: built-in monitors and colour tags
//!
//! The numeric functions assume validated input. Parse user or catalog data
//! through [`AspectRatio::parse`], [`Resolution::parse`] and [`Diagonal::new`]
//! (or [`MonitorConfiguration::new`], which does all three) first.
//!
//! # Example
//!
//! ```
//! use monsize_calc::{PALETTE, Viewport, find_preset, layout_comparison, Layout};
//!
//! let monitors = vec![
//!     find_preset("4K 27").unwrap().to_configuration(PALETTE[0]),
//!     find_preset("Ultrawide 34").unwrap().to_configuration(PALETTE[1]),
//! ];
//! match layout_comparison(&monitors, Viewport::default()) {
//!     Layout::Scaled { boxes, .. } => assert_eq!(boxes.len(), 2),
//!     Layout::Empty => unreachable!(),
//! }
//! ```

mod aspect;
mod dimensions;
mod error;
mod layout;
mod monitor;
mod palette;
mod presets;
mod resolution;
mod specs;

pub use aspect::AspectRatio;
pub use dimensions::{
    CM_PER_INCH, Diagonal, PhysicalDimensions, inches_to_cm, physical_dimensions, pixel_density,
};
pub use error::CalcError;
pub use layout::{Layout, ScaledBox, Viewport, layout_comparison, shared_scale_factor};
pub use monitor::{MonitorConfiguration, MonitorInput, validate_all};
pub use palette::{DisplayColor, PALETTE, color_for_index};
pub use presets::{MonitorPreset, PRESETS, find_preset};
pub use resolution::Resolution;
pub use specs::{MonitorMetrics, SpecCell, SpecRow, SpecRowKind, SpecTable};
