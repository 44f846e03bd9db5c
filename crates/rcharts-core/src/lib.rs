//! rcharts Core
//!
//! This crate contains the ambient functionality shared by the rcharts crates:
//! logging setup, profiling scopes, collection aliases and the explicit layout
//! configuration threaded through a render pass.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod profiling;

pub use config::{LayoutConfig, MarkerConfig, SeriesPalette};
