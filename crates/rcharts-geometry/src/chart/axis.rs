//! Axis layout: ticks and value-to-position transforms.
//!
//! An axis is one of three kinds, fixed at construction:
//! - `Continuous` - rounded domain, arithmetic tick progression
//! - `Discrete` - exact domain, one tick per key on a numeric scale
//! - `Categorical` - one evenly spaced, centred slot per category
//!
//! Positions are percentages of the plot (0-100). Derived quantities are
//! computed once per axis and cached, so build a fresh axis for each data
//! snapshot.

use std::cell::OnceCell;
use std::cmp::Ordering;

use glam::DVec2;
use rcharts_core::profiling::profile_function;
use tracing::trace;

use super::data::{Graphable, select};
use super::domain::{Domain, Mode};
use super::options::{AxisName, AxisOptions, DiscreteKind, ValuesSelector};
use super::ticks::TickSelector;
use crate::value::{Caster, Value};

/// Layout strategy of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Continuous,
    Discrete,
    Categorical,
}

impl AxisKind {
    /// Whether values are laid out without interpolation.
    pub fn is_discrete(self) -> bool {
        matches!(self, AxisKind::Discrete | AxisKind::Categorical)
    }
}

/// A labeled reference point on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position in percent along the axis.
    pub position: f64,
    /// Value at this tick.
    pub value: Value,
}

/// The numbers a styling layer needs to size tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    pub tick_count: usize,
    /// Longest label, in characters.
    pub max_label_length: usize,
}

/// One chart dimension.
#[derive(Debug, Clone)]
pub struct Axis {
    name: AxisName,
    index: usize,
    selector: ValuesSelector,
    kind: AxisKind,
    stacked: bool,
    keys: Vec<Value>,
    values: Vec<Vec<Value>>,
    minimum: Value,
    maximum: Value,
    selector_ticks: TickSelector,
    tick_interval: OnceCell<f64>,
    domain: OnceCell<Domain>,
    ticks: OnceCell<Vec<Tick>>,
}

impl Axis {
    /// Build an axis over `graphable`.
    ///
    /// The axis is categorical when declared so, or when the first selected
    /// value is a label and no other kind was declared.
    pub fn new(
        graphable: &Graphable,
        name: AxisName,
        index: usize,
        options: &AxisOptions,
    ) -> Self {
        let selector = options.selector.unwrap_or_default();
        let values = select(graphable, selector);
        let kind = match options.discrete {
            Some(DiscreteKind::Categorical) => AxisKind::Categorical,
            Some(DiscreteKind::Discrete) => AxisKind::Discrete,
            None if values.first().and_then(|v| v.first()).is_some_and(Value::is_label) => {
                AxisKind::Categorical
            }
            None => AxisKind::Continuous,
        };
        let stacked = options.stacked.unwrap_or(false);

        let minimum = options.minimum.clone().unwrap_or_else(|| {
            extreme(values.iter().filter_map(|v| category_minimum(v, stacked)), Ordering::Less)
                .unwrap_or(Value::Number(0.0))
        });
        let maximum = options.maximum.clone().unwrap_or_else(|| {
            extreme(values.iter().filter_map(|v| category_maximum(v, stacked)), Ordering::Greater)
                .unwrap_or(Value::Number(0.0))
        });

        tracing::debug!(
            axis = %name,
            index,
            ?kind,
            %minimum,
            %maximum,
            "built axis"
        );

        Self {
            name,
            index,
            selector,
            kind,
            stacked,
            keys: graphable.keys().cloned().collect(),
            values,
            minimum,
            maximum,
            selector_ticks: TickSelector::default(),
            tick_interval: OnceCell::new(),
            domain: OnceCell::new(),
            ticks: OnceCell::new(),
        }
    }

    /// Aim for `count` intervals instead of the default 10.
    ///
    /// Call before any derived quantity is read.
    pub fn with_target_tick_count(mut self, count: usize) -> Self {
        self.selector_ticks = TickSelector::new(count);
        self
    }

    pub fn name(&self) -> AxisName {
        self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn selector(&self) -> ValuesSelector {
        self.selector
    }

    pub fn is_discrete(&self) -> bool {
        self.kind.is_discrete()
    }

    pub fn is_categorical(&self) -> bool {
        self.kind == AxisKind::Categorical
    }

    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    pub fn is_horizontal(&self) -> bool {
        self.name == AxisName::X
    }

    pub fn is_vertical(&self) -> bool {
        self.name == AxisName::Y
    }

    /// Category keys in dataset order.
    pub fn keys(&self) -> &[Value] {
        &self.keys
    }

    /// Raw lower bound (explicit override or data minimum).
    pub fn minimum(&self) -> &Value {
        &self.minimum
    }

    /// Raw upper bound (explicit override or data maximum).
    pub fn maximum(&self) -> &Value {
        &self.maximum
    }

    fn has_data(&self) -> bool {
        !self.keys.is_empty()
    }

    fn values_count(&self) -> usize {
        self.values.len()
    }

    /// Step between consecutive continuous ticks, in the axis' magnitude
    /// units (seconds for temporal data).
    pub fn tick_interval(&self) -> f64 {
        *self.tick_interval.get_or_init(|| {
            let interval = match self.kind {
                AxisKind::Categorical if self.has_data() => 1.0,
                AxisKind::Categorical => 0.0,
                AxisKind::Discrete => self.selector_ticks.interval(&self.minimum, &self.maximum),
                AxisKind::Continuous => self.bounded_interval(),
            };
            trace!(axis = %self.name, index = self.index, interval, "selected tick interval");
            interval
        })
    }

    /// Smallest catalog interval whose resolved domain needs no more than
    /// the target number of intervals.
    ///
    /// Rounding the minimum down can add an interval beyond the target, so
    /// the selector's choice is stepped up the catalog until it fits.
    fn bounded_interval(&self) -> f64 {
        let target = self.selector_ticks.target_tick_count();
        let temporal = self.minimum.is_temporal();
        let mut interval = self.selector_ticks.interval(&self.minimum, &self.maximum);

        while interval > 0.0 {
            let trial = Domain::new(
                self.minimum.clone(),
                self.maximum.clone(),
                interval,
                self.domain_mode(),
            );
            if trial.tick_count() <= target {
                break;
            }
            let next = self.selector_ticks.next_interval(interval, temporal);
            if next <= interval {
                break;
            }
            trace!(axis = %self.name, from = interval, to = next, "stepping up tick interval");
            interval = next;
        }
        interval
    }

    fn domain_mode(&self) -> Mode {
        if self.is_discrete() || (self.selector == ValuesSelector::Keys && self.minimum.is_temporal()) {
            Mode::Exact
        } else {
            Mode::Rounded
        }
    }

    /// The resolved domain. Exact for discrete axes and for temporal keys.
    pub fn domain(&self) -> &Domain {
        self.domain.get_or_init(|| {
            Domain::new(
                self.minimum.clone(),
                self.maximum.clone(),
                self.tick_interval(),
                self.domain_mode(),
            )
        })
    }

    pub fn adjusted_minimum(&self) -> &Value {
        self.domain().minimum()
    }

    pub fn adjusted_maximum(&self) -> &Value {
        self.domain().maximum()
    }

    /// Number of intervals between ticks.
    ///
    /// Categorical axes have one fewer than their categories; discrete axes
    /// count their keys.
    pub fn tick_count(&self) -> usize {
        match self.kind {
            AxisKind::Categorical => self.values_count().saturating_sub(1),
            AxisKind::Discrete => self.values_count(),
            AxisKind::Continuous => self.domain().tick_count(),
        }
    }

    /// Ordered ticks. Empty when the axis has no data.
    pub fn ticks(&self) -> &[Tick] {
        self.ticks.get_or_init(|| {
            profile_function!();

            if !self.has_data() {
                return Vec::new();
            }
            let count = match self.kind {
                AxisKind::Continuous => self.tick_count() + 1,
                AxisKind::Discrete | AxisKind::Categorical => self.values_count(),
            };
            let ticks: Vec<Tick> = (0..count)
                .filter_map(|i| {
                    Some(Tick {
                        position: self.position_at(i)?,
                        value: self.value_at(i)?,
                    })
                })
                .collect();
            trace!(axis = %self.name, index = self.index, ticks = ticks.len(), "laid out ticks");
            ticks
        })
    }

    /// Position of the `index`-th tick.
    pub fn position_at(&self, index: usize) -> Option<f64> {
        if !self.has_data() {
            return None;
        }
        match self.kind {
            AxisKind::Categorical => (index < self.values_count())
                .then(|| (index as f64 + 0.5) * 100.0 / self.values_count() as f64),
            AxisKind::Discrete => self.position_for(&self.value_at(index)?),
            // the last exact tick may fall short of the maximum, so ticks
            // are placed by value rather than spread evenly
            AxisKind::Continuous if self.domain().is_exact() => {
                self.position_for(&self.value_at(index)?)
            }
            AxisKind::Continuous => {
                let tick_count = self.tick_count();
                (index <= tick_count).then(|| index as f64 * 100.0 / tick_count.max(1) as f64)
            }
        }
    }

    /// Value of the `index`-th tick.
    pub fn value_at(&self, index: usize) -> Option<Value> {
        if !self.has_data() {
            return None;
        }
        match self.kind {
            AxisKind::Discrete | AxisKind::Categorical => {
                let first = self.values.get(index)?.first();
                first.or_else(|| self.keys.get(index)).cloned()
            }
            AxisKind::Continuous => {
                if index > self.tick_count() {
                    return None;
                }
                let start = self.adjusted_minimum();
                let interval = self.tick_interval();
                let seconds = Caster::seconds(start)? + index as f64 * interval;
                if self.domain().is_exact() {
                    let end = Caster::seconds(self.adjusted_maximum())?;
                    if seconds > end + interval * 1e-9 {
                        return None;
                    }
                }
                Some(Caster::from_seconds(seconds, start))
            }
        }
    }

    /// Position of a raw value.
    ///
    /// Categorical axes place known keys in the centre of their slot and
    /// return `None` for unknown ones. Other axes map the value linearly onto
    /// the adjusted domain.
    pub fn position_for(&self, value: &Value) -> Option<f64> {
        match self.kind {
            AxisKind::Categorical => {
                let index = self.keys.iter().position(|key| key == value)?;
                self.position_at(index)
            }
            _ => Caster::seconds(value).map(|magnitude| self.position_of(magnitude)),
        }
    }

    /// Position of a magnitude on the adjusted domain.
    ///
    /// Exactly 0 when the domain has zero width. Values outside the domain
    /// extrapolate beyond 0-100.
    pub fn position_of(&self, magnitude: f64) -> f64 {
        let bounds = (
            Caster::seconds(self.adjusted_minimum()),
            Caster::seconds(self.adjusted_maximum()),
        );
        match bounds {
            (Some(min), Some(max)) if max != min => (magnitude - min) / (max - min) * 100.0,
            _ => 0.0,
        }
    }

    /// Signed span between two magnitudes.
    ///
    /// Spans ending below zero are measured on the mirrored values so that
    /// bars below a zero baseline size correctly.
    pub fn length_between(&self, from: f64, to: f64) -> f64 {
        if to < 0.0 {
            self.position_of(-to) - self.position_of(-from)
        } else {
            self.position_of(to) - self.position_of(from)
        }
    }

    /// Tick count and longest `Display` label.
    pub fn tick_summary(&self) -> TickSummary {
        self.tick_summary_with(|value| value.to_string())
    }

    /// Tick count and longest label as rendered by `format`.
    pub fn tick_summary_with(&self, format: impl Fn(&Value) -> String) -> TickSummary {
        let ticks = self.ticks();
        TickSummary {
            tick_count: ticks.len(),
            max_label_length: ticks
                .iter()
                .map(|tick| format(&tick.value).chars().count())
                .max()
                .unwrap_or(0),
        }
    }

    /// Offset of each tick label within the axis area.
    ///
    /// Horizontal axes run left to right along the top edge. Vertical axes
    /// run bottom to top, hugging the plot on the right for the primary axis
    /// and on the left for secondary ones.
    pub fn tick_placements(&self) -> Vec<DVec2> {
        self.ticks()
            .iter()
            .map(|tick| match self.name {
                AxisName::X => DVec2::new(tick.position, 0.0),
                AxisName::Y => DVec2::new(
                    if self.index == 0 { 100.0 } else { 0.0 },
                    100.0 - tick.position,
                ),
            })
            .collect()
    }
}

/// Lower bound of one category: the sum (when stacked) or minimum of its
/// non-positive values, else the minimum of all its values.
fn category_minimum(values: &[Value], stacked: bool) -> Option<Value> {
    category_bound(values, stacked, |v| !v.is_positive(), Ordering::Less)
}

/// Upper bound of one category, mirroring [`category_minimum`].
fn category_maximum(values: &[Value], stacked: bool) -> Option<Value> {
    category_bound(values, stacked, |v| !v.is_negative(), Ordering::Greater)
}

fn category_bound(
    values: &[Value],
    stacked: bool,
    keep: impl Fn(&Value) -> bool,
    direction: Ordering,
) -> Option<Value> {
    let kept: Vec<&Value> = values.iter().filter(|v| keep(v)).collect();
    if kept.is_empty() {
        return extreme(values.iter().cloned(), direction);
    }
    if stacked {
        let numbers: Option<Vec<f64>> = kept.iter().map(|v| v.as_number()).collect();
        if let Some(numbers) = numbers {
            return Some(Value::Number(numbers.iter().sum()));
        }
    }
    extreme(kept.into_iter().cloned(), direction)
}

/// The least (`Ordering::Less`) or greatest (`Ordering::Greater`) value.
/// Unordered values never replace the running extreme.
fn extreme(values: impl Iterator<Item = Value>, direction: Ordering) -> Option<Value> {
    values.fold(None, |best, value| match best {
        Some(best) if value.partial_cmp(&best) != Some(direction) => Some(best),
        _ => Some(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::data::Entry;
    use crate::chart::ticks::{DAY, WEEK};
    use chrono::NaiveDate;

    fn fruit() -> Graphable {
        [("Apples", 1.0), ("Pears", 8.0), ("Oranges", 2.0), ("Bananas", 10.0)]
            .into_iter()
            .map(|(k, v)| (Value::from(k), Entry::from(v)))
            .collect()
    }

    fn numeric(pairs: &[(f64, f64)]) -> Graphable {
        pairs
            .iter()
            .map(|(k, v)| (Value::from(*k), Entry::from(*v)))
            .collect()
    }

    fn x_axis(graphable: &Graphable) -> Axis {
        Axis::new(
            graphable,
            AxisName::X,
            0,
            &AxisOptions::new().with_selector(ValuesSelector::Keys),
        )
    }

    fn y_axis(graphable: &Graphable) -> Axis {
        Axis::new(graphable, AxisName::Y, 0, &AxisOptions::new())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.001,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_label_keys_are_categorical() {
        let axis = x_axis(&fruit());

        assert_eq!(axis.kind(), AxisKind::Categorical);
        assert!(axis.is_discrete());
        assert!(axis.is_horizontal());
    }

    #[test]
    fn test_categorical_slots_are_centred() {
        let axis = x_axis(&fruit());

        assert_close(axis.position_for(&Value::from("Apples")).unwrap(), 12.5);
        assert_close(axis.position_for(&Value::from("Bananas")).unwrap(), 87.5);
        assert_eq!(axis.position_for(&Value::from("Kiwis")), None);
        assert_eq!(axis.tick_count(), 3);
        assert_eq!(axis.ticks().len(), 4);
    }

    #[test]
    fn test_single_category_is_centred() {
        let graphable: Graphable = [(Value::from("a"), Entry::from(1.0))].into_iter().collect();
        let axis = x_axis(&graphable);

        assert_close(axis.position_for(&Value::from("a")).unwrap(), 50.0);
    }

    #[test]
    fn test_fruit_magnitude_axis() {
        let axis = y_axis(&fruit());

        assert_eq!(axis.kind(), AxisKind::Continuous);
        assert_eq!(axis.adjusted_minimum(), &Value::from(1.0));
        assert_eq!(axis.adjusted_maximum(), &Value::from(10.0));

        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 10);
        for (i, tick) in ticks.iter().enumerate() {
            assert_eq!(tick.value, Value::from((i + 1) as f64));
            assert_close(100.0 - tick.position, 100.0 - i as f64 * 100.0 / 9.0);
        }
        assert_close(100.0 - ticks[1].position, 88.889);
    }

    #[test]
    fn test_explicit_minimum_overrides_data() {
        let graphable = fruit();
        let axis = Axis::new(
            &graphable,
            AxisName::Y,
            0,
            &AxisOptions::new().with_minimum(0.0),
        );

        assert_eq!(axis.adjusted_minimum(), &Value::from(0.0));
        assert_eq!(axis.adjusted_maximum(), &Value::from(10.0));
        assert_eq!(axis.ticks().len(), 11);
    }

    #[test]
    fn test_domain_endpoints_map_to_edges() {
        let axis = y_axis(&numeric(&[(1.0, 7.0), (2.0, 23.0)]));

        assert_close(axis.position_for(axis.adjusted_minimum()).unwrap(), 0.0);
        assert_close(axis.position_for(axis.adjusted_maximum()).unwrap(), 100.0);
    }

    #[test]
    fn test_continuous_domains_stay_within_target() {
        let ranges = [
            (0.5, 10.4),
            (-42.0, 97.1),
            (0.001, 0.0093),
            (1e6, 3.7e7),
            (-5.0, -0.3),
            (50.0, 50.0),
            (0.0, 0.0),
            (-1e-3, 1e-3),
            (7.0, 23.0),
            (0.3, 0.31),
            (1.0, 10.0),
        ];

        for (minimum, maximum) in ranges {
            let axis = y_axis(&numeric(&[(1.0, minimum), (2.0, maximum)]));
            let low = axis.adjusted_minimum().as_number().unwrap();
            let high = axis.adjusted_maximum().as_number().unwrap();
            let slack = 1e-9 * (maximum - minimum).abs().max(1.0);

            assert!(low <= minimum + slack, "{minimum}..{maximum}: low {low}");
            assert!(high >= maximum - slack, "{minimum}..{maximum}: high {high}");
            assert!(
                axis.ticks().len() <= 11,
                "{minimum}..{maximum}: {} ticks at interval {}",
                axis.ticks().len(),
                axis.tick_interval()
            );
            assert_close(axis.position_of(low), 0.0);
            if high != low {
                assert_close(axis.position_of(high), 100.0);
            }
            for tick in axis.ticks() {
                assert!((-0.001..=100.001).contains(&tick.position));
            }
        }
    }

    #[test]
    fn test_rounded_minimum_steps_interval_up() {
        let axis = y_axis(&numeric(&[(1.0, 0.5), (2.0, 10.4)]));

        assert_eq!(axis.tick_interval(), 2.0);
        assert_eq!(axis.adjusted_minimum(), &Value::from(0.0));
        assert_eq!(axis.adjusted_maximum(), &Value::from(12.0));
        assert_eq!(axis.ticks().len(), 7);
    }

    #[test]
    fn test_empty_axis_degrades() {
        let graphable = Graphable::new();
        let axis = y_axis(&graphable);

        assert!(axis.ticks().is_empty());
        assert_eq!(axis.tick_count(), 0);
        assert_eq!(axis.position_at(0), None);
        assert_eq!(axis.value_at(0), None);
        assert_eq!(axis.position_of(5.0), 0.0);
    }

    #[test]
    fn test_single_value_axis_is_padded() {
        let axis = y_axis(&numeric(&[(1.0, 50.0)]));

        assert!(axis.tick_interval() > 0.0);
        assert!(axis.adjusted_minimum() <= &Value::from(50.0));
        assert!(axis.adjusted_maximum() >= &Value::from(50.0));
    }

    #[test]
    fn test_length_between_mirrors_negative_spans() {
        let axis = y_axis(&numeric(&[(1.0, -10.0), (2.0, 10.0)]));

        assert_close(axis.length_between(0.0, 5.0), 25.0);
        assert_close(axis.length_between(0.0, -5.0), 25.0);
    }

    #[test]
    fn test_stacked_bounds_sum_series() {
        let graphable: Graphable = [(
            Value::from("a"),
            Entry::series([("one", Some(3.0)), ("two", Some(4.0)), ("three", Some(-2.0))]),
        )]
        .into_iter()
        .collect();
        let axis = Axis::new(
            &graphable,
            AxisName::Y,
            0,
            &AxisOptions::new().with_stacked(true),
        );

        assert_eq!(axis.maximum(), &Value::from(7.0));
        assert_eq!(axis.minimum(), &Value::from(-2.0));
    }

    #[test]
    fn test_declared_discrete_numeric_keys() {
        let graphable = numeric(&[(10.0, 1.0), (20.0, 2.0), (30.0, 3.0)]);
        let axis = Axis::new(
            &graphable,
            AxisName::X,
            0,
            &AxisOptions::new()
                .with_selector(ValuesSelector::Keys)
                .with_discrete(DiscreteKind::Discrete),
        );

        assert_eq!(axis.domain().mode(), Mode::Exact);
        let positions: Vec<f64> = axis.ticks().iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_declared_categorical_numeric_keys() {
        let graphable = numeric(&[(10.0, 1.0), (20.0, 2.0)]);
        let axis = Axis::new(
            &graphable,
            AxisName::X,
            0,
            &AxisOptions::new()
                .with_selector(ValuesSelector::Keys)
                .with_discrete(DiscreteKind::Categorical),
        );

        assert_close(axis.position_for(&Value::from(20.0)).unwrap(), 75.0);
    }

    #[test]
    fn test_numeric_keys_are_not_sniffed_as_categorical() {
        let axis = x_axis(&numeric(&[(10.0, 1.0), (20.0, 2.0)]));

        assert_eq!(axis.kind(), AxisKind::Continuous);
    }

    #[test]
    fn test_date_keys_use_exact_domain() {
        let graphable: Graphable = (1..=15)
            .map(|day| {
                (
                    Value::from(NaiveDate::from_ymd_opt(2024, 5, day).unwrap()),
                    Entry::from(day as f64),
                )
            })
            .collect();
        let axis = x_axis(&graphable);

        assert_eq!(axis.domain().mode(), Mode::Exact);
        assert_eq!(axis.tick_interval(), 2.0 * DAY);
        assert!(axis.tick_interval() < WEEK);
        assert_eq!(
            axis.ticks()[0].value,
            Value::from(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert_close(
            axis.position_for(&Value::from(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()))
                .unwrap(),
            100.0,
        );
    }

    #[test]
    fn test_exact_ticks_sit_at_their_values() {
        let may = |day| Value::from(NaiveDate::from_ymd_opt(2024, 5, day).unwrap());
        let graphable: Graphable = (1..=16).map(|day| (may(day), Entry::from(day as f64))).collect();
        let axis = x_axis(&graphable);

        assert_eq!(axis.tick_interval(), 2.0 * DAY);
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 8);
        for tick in ticks {
            let expected = axis.position_for(&tick.value).unwrap();
            assert!((tick.position - expected).abs() < 1e-9);
        }
        assert_eq!(ticks[7].value, may(15));
        assert_close(ticks[7].position, 14.0 * 100.0 / 15.0);
        assert!(ticks.last().unwrap().value <= may(16));
    }

    #[test]
    fn test_tick_summary_and_placements() {
        let graphable = fruit();
        let x = x_axis(&graphable);
        let y = Axis::new(&graphable, AxisName::Y, 1, &AxisOptions::new());

        assert_eq!(
            x.tick_summary(),
            TickSummary {
                tick_count: 4,
                max_label_length: 7
            }
        );
        assert_eq!(x.tick_placements()[0], DVec2::new(12.5, 0.0));
        assert_eq!(y.tick_placements()[0], DVec2::new(0.0, 100.0));
        assert_eq!(
            x.tick_summary_with(|v| format!("<{v}>")).max_label_length,
            9
        );
    }
}
