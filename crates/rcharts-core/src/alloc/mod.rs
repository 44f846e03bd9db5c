//! Collection types used across rcharts.
//!
//! - `HashMap` is AHash-backed and keys the view memoization caches
//! - `IndexMap` is the insertion-ordered map used for categories and series

pub use ahash::AHashMap as HashMap;

/// Insertion-ordered map. Category and series order is significant
/// throughout the layout engine.
pub use indexmap::IndexMap;
