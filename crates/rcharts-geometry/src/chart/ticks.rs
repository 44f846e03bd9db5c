//! Tick interval selection.
//!
//! Picks a "nice" step for a numeric or temporal range. Numeric ranges use
//! the decimal catalog `{1, 2, 2.5, 5, 10} x 10^n`; temporal ranges use a
//! catalog of calendar durations in seconds.

use crate::value::{Caster, Value};

/// Decimal multipliers for numeric intervals.
pub const DECIMAL_INTERVALS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

pub const SECOND: f64 = 1.0;
pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const WEEK: f64 = 7.0 * DAY;
/// Average Gregorian month (1/12 year).
pub const MONTH: f64 = 2_629_746.0;
/// Average Gregorian year (365.2425 days).
pub const YEAR: f64 = 31_556_952.0;

/// Temporal intervals in seconds, ascending.
pub const TEMPORAL_INTERVALS: [f64; 32] = [
    SECOND,
    2.0 * SECOND,
    5.0 * SECOND,
    10.0 * SECOND,
    15.0 * SECOND,
    30.0 * SECOND,
    MINUTE,
    2.0 * MINUTE,
    5.0 * MINUTE,
    10.0 * MINUTE,
    15.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    2.0 * HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    WEEK,
    2.0 * WEEK,
    MONTH,
    2.0 * MONTH,
    3.0 * MONTH,
    6.0 * MONTH,
    YEAR,
    2.0 * YEAR,
    5.0 * YEAR,
    10.0 * YEAR,
    20.0 * YEAR,
    50.0 * YEAR,
    100.0 * YEAR,
];

/// Relative slack when comparing a raw step against a catalog entry, so that
/// steps like `0.025` are not pushed past `2.5 x 0.01` by rounding noise.
const CATALOG_TOLERANCE: f64 = 1e-9;

/// Padding added to each side of a zero-width numeric range.
pub fn empty_range_padding(minimum: f64, maximum: f64) -> f64 {
    if minimum != maximum {
        return 0.0;
    }
    let padding = if maximum == 0.0 { 1.0 } else { maximum.abs() * 0.1 };
    padding * 0.5
}

/// Smallest decimal catalog entry at or above `raw_step`.
///
/// Returns 0 for a non-positive or non-finite step.
pub fn decimal_interval(raw_step: f64) -> f64 {
    if !(raw_step > 0.0) || !raw_step.is_finite() {
        return 0.0;
    }
    let base = 10f64.powi(raw_step.log10().floor() as i32);
    let ratio = raw_step / base;
    let multiplier = DECIMAL_INTERVALS
        .iter()
        .copied()
        .find(|n| *n >= ratio * (1.0 - CATALOG_TOLERANCE))
        .unwrap_or(10.0);
    base * multiplier
}

/// Smallest temporal catalog entry at or above `raw_step` seconds, or the
/// largest entry when none is big enough.
///
/// Returns 0 for a non-positive or non-finite step.
pub fn temporal_interval(raw_step: f64) -> f64 {
    if !(raw_step > 0.0) || !raw_step.is_finite() {
        return 0.0;
    }
    TEMPORAL_INTERVALS
        .iter()
        .copied()
        .find(|interval| *interval >= raw_step)
        .unwrap_or(TEMPORAL_INTERVALS[TEMPORAL_INTERVALS.len() - 1])
}

/// Chooses tick intervals for a target number of ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSelector {
    target_tick_count: usize,
}

impl Default for TickSelector {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TickSelector {
    /// Create a selector aiming for `target_tick_count` intervals.
    pub fn new(target_tick_count: usize) -> Self {
        Self {
            target_tick_count: target_tick_count.max(1),
        }
    }

    pub fn target_tick_count(&self) -> usize {
        self.target_tick_count
    }

    /// The catalog entry after `interval`. The largest temporal entry has no
    /// successor and is returned unchanged.
    pub fn next_interval(&self, interval: f64, temporal: bool) -> f64 {
        if temporal {
            TEMPORAL_INTERVALS
                .iter()
                .copied()
                .find(|candidate| *candidate > interval * (1.0 + CATALOG_TOLERANCE))
                .unwrap_or(interval)
        } else {
            decimal_interval(interval * (1.0 + 1e-6))
        }
    }

    /// Interval for the raw bounds of a continuous axis.
    ///
    /// Temporal bounds are measured in seconds; numeric bounds are padded
    /// when they coincide. Labels and mixed kinds yield 0.
    pub fn interval(&self, minimum: &Value, maximum: &Value) -> f64 {
        let target = self.target_tick_count as f64;

        if minimum.is_temporal() {
            let range = match (Caster::seconds(minimum), Caster::seconds(maximum)) {
                (Some(min), Some(max)) => (max - min).abs(),
                _ => return 0.0,
            };
            return temporal_interval(range / target);
        }

        match (minimum.as_number(), maximum.as_number()) {
            (Some(min), Some(max)) => {
                let padding = empty_range_padding(min, max);
                decimal_interval(((max + padding) - (min - padding)) / target)
            }
            _ => 0.0,
        }
    }
}
