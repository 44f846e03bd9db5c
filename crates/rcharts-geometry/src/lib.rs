//! rcharts Geometry - chart layout in percent space
//!
//! This crate provides:
//! - Axis values that may be numbers, dates, times or labels, and the caster
//!   between them and plain magnitudes
//! - Curve geometry: control points, paths and their serialized form
//! - Chart layout (optional "chart" feature): tick intervals, rounded
//!   domains, axes, series aggregation, and bar, line, area, scatter and
//!   rule geometry
//!
//! All positions are percentages of the plot (0-100). Rendering them into
//! markup is left to the caller.
//!
//! # Example
//!
//! ```
//! use rcharts_geometry::chart::{AxisSelection, Composition, Entry, Graphable, Options, SeriesLayout};
//! use rcharts_geometry::Value;
//! use rcharts_core::LayoutConfig;
//!
//! let data: Graphable = [(10.0, 15.3), (20.0, 25.6), (30.0, 35.9)]
//!     .into_iter()
//!     .map(|(k, v)| (Value::from(k), Entry::from(v)))
//!     .collect();
//!
//! let composition = Composition::new(data, &Options::new(), LayoutConfig::default());
//! let line = SeriesLayout::new(&composition, "", AxisSelection::default())?.line()?;
//! assert!(line.path_data().starts_with("M 0,"));
//! # Ok::<(), rcharts_geometry::LayoutError>(())
//! ```

// Core primitives
mod error;
mod path;
mod point;
mod rect;
mod value;

// Chart module (optional)
#[cfg(feature = "chart")]
pub mod chart;

// Re-exports
pub use error::*;
pub use path::*;
pub use point::*;
pub use rect::*;
pub use value::*;
