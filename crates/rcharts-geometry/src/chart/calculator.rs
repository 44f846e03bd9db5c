//! Series aggregation: plain, signed and stacked views of a dataset.
//!
//! Views are derived by chaining operations on the [`Calculator`]:
//!
//! ```
//! use rcharts_geometry::chart::{Calculator, Entry, Graphable, Sign};
//! use rcharts_geometry::Value;
//!
//! let mut data = Graphable::new();
//! data.insert(Value::from("a"), Entry::series([("one", Some(2.0)), ("two", Some(-1.0)), ("three", Some(3.0))]));
//!
//! let calculator = Calculator::new(&data);
//! let stacked = calculator.signed(Some(Sign::Positive)).stacked(false);
//! assert_eq!(stacked.series("three")?[&Value::from("a")], Some(5.0));
//! # Ok::<(), rcharts_geometry::LayoutError>(())
//! ```
//!
//! Every view is memoized by its operation chain, so the many views a chart
//! draws from one dataset are each computed once.

use std::cell::RefCell;
use std::rc::Rc;

use rcharts_core::alloc::{HashMap, IndexMap};
use rcharts_core::profiling::profile_scope;

use super::data::{Graphable, series_names};
use crate::error::{LayoutError, LayoutResult};
use crate::value::Value;

/// Sign filter for a signed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Keep values greater than zero.
    Positive,
    /// Keep values less than zero.
    Negative,
}

impl Sign {
    fn keeps(self, value: f64) -> bool {
        match self {
            Sign::Positive => value > 0.0,
            Sign::Negative => value < 0.0,
        }
    }
}

/// One step of a view's derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Signed(Sign),
    Stacked { exclude_current: bool },
}

/// Per-category values aligned to the series names.
#[derive(Debug, Clone, PartialEq, Default)]
struct Table {
    rows: IndexMap<Value, Vec<Option<f64>>>,
}

impl Table {
    fn map_rows(&self, f: impl Fn(&[Option<f64>]) -> Vec<Option<f64>>) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|(key, row)| (key.clone(), f(row)))
                .collect(),
        }
    }

    fn apply(&self, operation: Operation) -> Self {
        match operation {
            Operation::Signed(sign) => self.map_rows(|row| {
                row.iter()
                    .map(|value| value.filter(|v| sign.keeps(*v)))
                    .collect()
            }),
            Operation::Stacked { exclude_current } => self.map_rows(|row| {
                (0..row.len())
                    .map(|i| {
                        let end = if exclude_current { i } else { i + 1 };
                        let present: Vec<f64> = row[..end].iter().flatten().copied().collect();
                        (!present.is_empty()).then(|| present.iter().sum())
                    })
                    .collect()
            }),
        }
    }
}

/// Derives series views from one dataset.
///
/// Holds memoized views behind a `RefCell`; build one per render pass.
#[derive(Debug)]
pub struct Calculator {
    names: Vec<String>,
    base: Rc<Table>,
    selections: RefCell<HashMap<Vec<Operation>, Rc<Table>>>,
}

impl Calculator {
    pub fn new(graphable: &Graphable) -> Self {
        let names = series_names(graphable);
        let rows = graphable
            .iter()
            .map(|(key, entry)| {
                let row = names.iter().map(|name| entry.get(name)).collect();
                (key.clone(), row)
            })
            .collect();

        Self {
            names,
            base: Rc::new(Table { rows }),
            selections: RefCell::new(HashMap::default()),
        }
    }

    /// Series names in order.
    pub fn series_names(&self) -> &[String] {
        &self.names
    }

    /// The plain view.
    pub fn view(&self) -> View<'_> {
        View {
            calculator: self,
            chain: Vec::new(),
            table: Rc::clone(&self.base),
        }
    }

    /// Keep only values of `sign`; `None` is the plain view.
    pub fn signed(&self, sign: Option<Sign>) -> View<'_> {
        self.view().signed(sign)
    }

    /// Cumulative sums across series within each category.
    pub fn stacked(&self, exclude_current: bool) -> View<'_> {
        self.view().stacked(exclude_current)
    }

    /// Per-category total of all series, missing if any series is missing.
    pub fn sum_complete(&self) -> IndexMap<Value, Option<f64>> {
        self.view().sum_complete()
    }

    /// One series of the plain view.
    pub fn series(&self, name: &str) -> LayoutResult<IndexMap<Value, Option<f64>>> {
        self.view().series(name)
    }

    fn select(&self, chain: &[Operation], source: &Table, operation: Operation) -> Rc<Table> {
        let mut selections = self.selections.borrow_mut();
        if let Some(table) = selections.get(chain) {
            tracing::trace!(?chain, "reusing series view");
            return Rc::clone(table);
        }

        profile_scope!("series_view");
        let table = Rc::new(source.apply(operation));
        selections.insert(chain.to_vec(), Rc::clone(&table));
        table
    }
}

/// A derived view over a [`Calculator`]'s dataset.
#[derive(Debug, Clone)]
pub struct View<'a> {
    calculator: &'a Calculator,
    chain: Vec<Operation>,
    table: Rc<Table>,
}

impl<'a> View<'a> {
    /// Operations applied to reach this view.
    pub fn chain(&self) -> &[Operation] {
        &self.chain
    }

    fn then(&self, operation: Operation) -> View<'a> {
        let mut chain = self.chain.clone();
        chain.push(operation);
        let table = self.calculator.select(&chain, &self.table, operation);
        View {
            calculator: self.calculator,
            chain,
            table,
        }
    }

    /// Keep only values of `sign`; `None` returns this view unchanged.
    pub fn signed(&self, sign: Option<Sign>) -> View<'a> {
        match sign {
            Some(sign) => self.then(Operation::Signed(sign)),
            None => self.clone(),
        }
    }

    /// For series `i`, the sum of present values of series `0..=i`, or
    /// `0..i` when `exclude_current` is set. Missing when no operand is
    /// present.
    pub fn stacked(&self, exclude_current: bool) -> View<'a> {
        self.then(Operation::Stacked { exclude_current })
    }

    /// Per-category total of all series, missing if any series is missing.
    pub fn sum_complete(&self) -> IndexMap<Value, Option<f64>> {
        self.table
            .rows
            .iter()
            .map(|(key, row)| {
                let total: Option<f64> = row.iter().copied().sum();
                (key.clone(), total)
            })
            .collect()
    }

    /// Values of one series by category.
    pub fn series(&self, name: &str) -> LayoutResult<IndexMap<Value, Option<f64>>> {
        let column = self
            .calculator
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| {
                tracing::warn!(series = name, "requested unknown series");
                LayoutError::UnknownSeries(name.to_string())
            })?;

        Ok(self
            .table
            .rows
            .iter()
            .map(|(key, row)| (key.clone(), row.get(column).copied().flatten()))
            .collect())
    }

    /// Values of every series in one category, in series order.
    pub fn category(&self, key: &Value) -> Option<&[Option<f64>]> {
        self.table.rows.get(key).map(Vec::as_slice)
    }
}
