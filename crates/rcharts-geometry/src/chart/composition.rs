//! Everything derived from one dataset for one render pass.

use rcharts_core::alloc::IndexMap;
use rcharts_core::LayoutConfig;

use super::axes::Axes;
use super::calculator::{Calculator, Sign, View};
use super::data::{Entry, Graphable};
use super::options::Options;
use crate::value::Value;

/// A dataset together with its axes and series calculator.
///
/// Axes and calculator cache derived quantities, so a composition must not
/// outlive the data snapshot it was built from. Build a fresh one per pass.
#[derive(Debug)]
pub struct Composition {
    data: Graphable,
    axes: Axes,
    calculator: Calculator,
    config: LayoutConfig,
}

impl Composition {
    pub fn new(data: Graphable, options: &Options, config: LayoutConfig) -> Self {
        rcharts_core::profiling::new_frame();

        let axes = Axes::new(&data, options, &config);
        let calculator = Calculator::new(&data);
        tracing::debug!(
            categories = data.len(),
            series = calculator.series_names().len(),
            "composed chart"
        );

        Self {
            data,
            axes,
            calculator,
            config,
        }
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn data(&self) -> &Graphable {
        &self.data
    }

    /// Category keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.data.keys()
    }

    /// The category at `index`.
    pub fn category(&self, index: usize) -> Option<(&Value, &Entry)> {
        self.data.get_index(index)
    }

    pub fn series_names(&self) -> &[String] {
        self.calculator.series_names()
    }

    pub fn signed(&self, sign: Option<Sign>) -> View<'_> {
        self.calculator.signed(sign)
    }

    pub fn stacked(&self, exclude_current: bool) -> View<'_> {
        self.calculator.stacked(exclude_current)
    }

    pub fn sum_complete(&self) -> IndexMap<Value, Option<f64>> {
        self.calculator.sum_complete()
    }
}
