//! The set of axes configured for one chart.

use rcharts_core::alloc::IndexMap;
use rcharts_core::LayoutConfig;

use super::axis::Axis;
use super::data::Graphable;
use super::options::{AxisName, Options};
use crate::error::{LayoutError, LayoutResult};

/// Axes by name and index.
#[derive(Debug, Clone)]
pub struct Axes {
    axes: IndexMap<AxisName, IndexMap<usize, Axis>>,
}

impl Axes {
    /// Build one axis per configured name and index.
    pub fn new(graphable: &Graphable, options: &Options, config: &LayoutConfig) -> Self {
        let mut axes: IndexMap<AxisName, IndexMap<usize, Axis>> = IndexMap::new();
        for (name, index, axis_options) in options.iter() {
            let axis = Axis::new(graphable, name, index, axis_options)
                .with_target_tick_count(config.target_tick_count);
            axes.entry(name).or_default().insert(index, axis);
        }
        Self { axes }
    }

    /// The axis with this name and index.
    pub fn fetch(&self, name: AxisName, index: usize) -> LayoutResult<&Axis> {
        self.axes
            .get(&name)
            .and_then(|indexed| indexed.get(&index))
            .ok_or_else(|| {
                tracing::warn!(axis = %name, index, "requested unknown axis");
                LayoutError::UnknownAxis {
                    name: name.to_string(),
                    index,
                }
            })
    }

    /// The category axis: `x` if it is discrete, else the first discrete
    /// axis, else `x` anyway.
    pub fn discrete(&self) -> LayoutResult<&Axis> {
        let x = self.fetch(AxisName::X, 0)?;
        if x.is_discrete() {
            return Ok(x);
        }
        Ok(self.iter().find(|axis| axis.is_discrete()).unwrap_or(x))
    }

    /// The magnitude axis: `y` if it is continuous, else the first
    /// continuous axis, else `y` anyway.
    pub fn continuous(&self) -> LayoutResult<&Axis> {
        let y = self.fetch(AxisName::Y, 0)?;
        if !y.is_discrete() {
            return Ok(y);
        }
        Ok(self.iter().find(|axis| !axis.is_discrete()).unwrap_or(y))
    }

    /// Resolve an explicitly named axis, or fall back to `fallback`.
    pub fn resolve(
        &self,
        requested: Option<(AxisName, usize)>,
        fallback: impl FnOnce(&Self) -> LayoutResult<&Axis>,
    ) -> LayoutResult<&Axis> {
        match requested {
            Some((name, index)) => self.fetch(name, index),
            None => fallback(self),
        }
    }

    /// All axes in name then index order.
    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values().flat_map(|indexed| indexed.values())
    }
}
