//! Per-axis options and their normalization.
//!
//! Every chart starts from the defaults `x[0] = {selector: Keys}` and
//! `y[0] = {selector: Values}`. User options are merged on top per axis name
//! and index, field by field.

use rcharts_core::alloc::IndexMap;

use crate::value::Value;

/// Axis dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisName {
    X,
    Y,
}

impl std::fmt::Display for AxisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisName::X => f.write_str("x"),
            AxisName::Y => f.write_str("y"),
        }
    }
}

/// Which part of the dataset an axis measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValuesSelector {
    /// The category keys.
    Keys,
    /// The series values.
    #[default]
    Values,
}

/// Declared non-interpolated axis kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscreteKind {
    /// Discrete values laid out on a numeric scale.
    Discrete,
    /// Labels, laid out in evenly spaced slots.
    Categorical,
}

/// Options for one axis. Unset fields fall through to the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisOptions {
    pub selector: Option<ValuesSelector>,
    pub minimum: Option<Value>,
    pub maximum: Option<Value>,
    pub discrete: Option<DiscreteKind>,
    pub stacked: Option<bool>,
}

impl AxisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: ValuesSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Explicit lower bound, overriding the data minimum.
    pub fn with_minimum(mut self, minimum: impl Into<Value>) -> Self {
        self.minimum = Some(minimum.into());
        self
    }

    /// Explicit upper bound, overriding the data maximum.
    pub fn with_maximum(mut self, maximum: impl Into<Value>) -> Self {
        self.maximum = Some(maximum.into());
        self
    }

    pub fn with_discrete(mut self, kind: DiscreteKind) -> Self {
        self.discrete = Some(kind);
        self
    }

    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = Some(stacked);
        self
    }

    /// Overlay `overrides` onto these options.
    pub fn merge(self, overrides: AxisOptions) -> Self {
        Self {
            selector: overrides.selector.or(self.selector),
            minimum: overrides.minimum.or(self.minimum),
            maximum: overrides.maximum.or(self.maximum),
            discrete: overrides.discrete.or(self.discrete),
            stacked: overrides.stacked.or(self.stacked),
        }
    }
}

/// Options for all axes of one name.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisOptionSet {
    /// Options for index 0.
    Single(AxisOptions),
    /// Options by position.
    List(Vec<AxisOptions>),
    /// Options by explicit index.
    Indexed(IndexMap<usize, AxisOptions>),
}

impl AxisOptionSet {
    fn into_indexed(self) -> IndexMap<usize, AxisOptions> {
        match self {
            AxisOptionSet::Single(options) => IndexMap::from([(0, options)]),
            AxisOptionSet::List(list) => list.into_iter().enumerate().collect(),
            AxisOptionSet::Indexed(map) => map,
        }
    }
}

impl From<AxisOptions> for AxisOptionSet {
    fn from(options: AxisOptions) -> Self {
        AxisOptionSet::Single(options)
    }
}

impl From<Vec<AxisOptions>> for AxisOptionSet {
    fn from(list: Vec<AxisOptions>) -> Self {
        AxisOptionSet::List(list)
    }
}

impl From<IndexMap<usize, AxisOptions>> for AxisOptionSet {
    fn from(map: IndexMap<usize, AxisOptions>) -> Self {
        AxisOptionSet::Indexed(map)
    }
}

/// Normalized options for every axis of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    axes: IndexMap<AxisName, IndexMap<usize, AxisOptions>>,
}

impl Default for Options {
    fn default() -> Self {
        let mut axes = IndexMap::new();
        axes.insert(
            AxisName::X,
            IndexMap::from([(0, AxisOptions::new().with_selector(ValuesSelector::Keys))]),
        );
        axes.insert(
            AxisName::Y,
            IndexMap::from([(0, AxisOptions::new().with_selector(ValuesSelector::Values))]),
        );
        Self { axes }
    }
}

impl Options {
    /// The default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge user options for the axes named `name`.
    pub fn with(mut self, name: AxisName, options: impl Into<AxisOptionSet>) -> Self {
        let target = self.axes.entry(name).or_default();
        for (index, overrides) in options.into().into_indexed() {
            let slot = target.entry(index).or_default();
            *slot = std::mem::take(slot).merge(overrides);
        }
        // explicit indices may arrive out of order
        target.sort_keys();
        self
    }

    /// Options of one axis, if configured.
    pub fn get(&self, name: AxisName, index: usize) -> Option<&AxisOptions> {
        self.axes.get(&name)?.get(&index)
    }

    /// All configured axes in name then index order.
    pub fn iter(&self) -> impl Iterator<Item = (AxisName, usize, &AxisOptions)> {
        self.axes.iter().flat_map(|(name, indexed)| {
            indexed
                .iter()
                .map(move |(index, options)| (*name, *index, options))
        })
    }
}
