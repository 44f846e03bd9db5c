//! Chart layout module.
//!
//! Turns a [`Graphable`] dataset into the geometry of:
//! - Bar charts
//! - Line charts
//! - Area charts, stacked or not
//! - Scatter plots
//!
//! # Pipeline
//!
//! 1. [`Options`] name the axes and how each selects its values
//! 2. [`Axes`] resolve kind, tick interval and [`Domain`] per axis
//! 3. [`Calculator`] derives signed and stacked series views
//! 4. [`SeriesLayout`], [`category_bars`] and [`axis_rules`] position the
//!    marks against the axes
//!
//! A [`Composition`] bundles steps 1-3 for one render pass.

// Core modules
mod axes;
mod axis;
mod calculator;
mod composition;
mod data;
mod domain;
mod options;
mod ticks;

// Mark geometry
mod bars;
mod rules;
mod series;

// Re-exports
pub use axes::*;
pub use axis::*;
pub use calculator::*;
pub use composition::*;
pub use data::*;
pub use domain::*;
pub use options::*;
pub use ticks::*;

pub use bars::*;
pub use rules::*;
pub use series::*;
