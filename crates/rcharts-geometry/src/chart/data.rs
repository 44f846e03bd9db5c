//! Graphable dataset model.
//!
//! A dataset is an ordered mapping from category key to either a bare value
//! or an ordered mapping of series name to value:
//!
//! ```
//! use rcharts_geometry::chart::{Entry, Graphable};
//! use rcharts_geometry::Value;
//!
//! let mut sales = Graphable::new();
//! sales.insert(Value::from("2023"), Entry::series([("North", Some(12.0)), ("South", None)]));
//! sales.insert(Value::from("2024"), Entry::series([("North", Some(15.0)), ("South", Some(4.0))]));
//!
//! assert_eq!(rcharts_geometry::chart::series_names(&sales), vec!["North", "South"]);
//! ```

use rcharts_core::alloc::IndexMap;

use super::options::ValuesSelector;
use crate::value::Value;

/// Series name under which bare entries are addressed.
pub const UNNAMED_SERIES: &str = "";

/// Values of one category.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A single value with no series name.
    Value(Option<f64>),
    /// Values keyed by series name.
    Series(IndexMap<String, Option<f64>>),
}

impl Entry {
    /// Build a series entry from name/value pairs.
    pub fn series<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Option<f64>)>) -> Self {
        Entry::Series(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// All values in series order.
    pub fn values(&self) -> Vec<Option<f64>> {
        match self {
            Entry::Value(v) => vec![*v],
            Entry::Series(series) => series.values().copied().collect(),
        }
    }

    /// Value of the named series.
    pub fn get(&self, name: &str) -> Option<f64> {
        match self {
            Entry::Value(v) if name == UNNAMED_SERIES => *v,
            Entry::Value(_) => None,
            Entry::Series(series) => series.get(name).copied().flatten(),
        }
    }

    /// Series present in this entry, in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Entry::Value(_) => vec![UNNAMED_SERIES],
            Entry::Series(series) => series.keys().map(String::as_str).collect(),
        }
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Entry::Value(Some(value))
    }
}

impl From<Option<f64>> for Entry {
    fn from(value: Option<f64>) -> Self {
        Entry::Value(value)
    }
}

impl From<IndexMap<String, Option<f64>>> for Entry {
    fn from(series: IndexMap<String, Option<f64>>) -> Self {
        Entry::Series(series)
    }
}

/// A dataset ready for layout.
pub type Graphable = IndexMap<Value, Entry>;

/// Series names across all categories, in first-seen order.
pub fn series_names(graphable: &Graphable) -> Vec<String> {
    let mut names: IndexMap<&str, ()> = IndexMap::new();
    for entry in graphable.values() {
        for name in entry.names() {
            names.entry(name).or_default();
        }
    }
    names.into_keys().map(String::from).collect()
}

/// Present values of each category, as pulled out by `selector`.
///
/// `Keys` yields the category key itself; `Values` yields the category's
/// series values with missing ones dropped.
pub fn select(graphable: &Graphable, selector: ValuesSelector) -> Vec<Vec<Value>> {
    match selector {
        ValuesSelector::Keys => graphable.keys().map(|key| vec![key.clone()]).collect(),
        ValuesSelector::Values => graphable
            .values()
            .map(|entry| entry.values().into_iter().flatten().map(Value::Number).collect())
            .collect(),
    }
}
