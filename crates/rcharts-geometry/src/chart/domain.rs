//! Domain resolution: raw bounds plus a tick interval to adjusted bounds.
//!
//! In [`Mode::Exact`] the adjusted bounds are the raw bounds. In
//! [`Mode::Rounded`] the minimum snaps down to the interval grid (and for
//! temporal values further down to a calendar boundary) and the maximum is
//! the first grid line at or above the raw maximum.

use std::cell::OnceCell;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use super::ticks::{DAY, MONTH, WEEK};
use crate::error::LayoutError;
use crate::value::{Caster, Value};

/// How adjusted bounds relate to the raw bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Adjusted bounds equal the raw bounds.
    Exact,
    /// Adjusted bounds snap outward to nice boundaries.
    #[default]
    Rounded,
}

impl FromStr for Mode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Mode::Exact),
            "rounded" => Ok(Mode::Rounded),
            other => {
                tracing::warn!(mode = other, "rejecting unsupported domain mode");
                Err(LayoutError::UnsupportedMode(other.to_string()))
            }
        }
    }
}

/// Adjusted bounds derived from raw bounds and a tick interval.
///
/// Derived quantities are computed on first access and cached.
#[derive(Debug, Clone)]
pub struct Domain {
    minimum: Value,
    maximum: Value,
    interval: f64,
    mode: Mode,
    adjusted_minimum: OnceCell<Value>,
    adjusted_maximum: OnceCell<Value>,
    tick_count: OnceCell<usize>,
}

impl Domain {
    pub fn new(minimum: Value, maximum: Value, interval: f64, mode: Mode) -> Self {
        Self {
            minimum,
            maximum,
            interval,
            mode,
            adjusted_minimum: OnceCell::new(),
            adjusted_maximum: OnceCell::new(),
            tick_count: OnceCell::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn is_exact(&self) -> bool {
        self.mode == Mode::Exact
    }

    pub fn is_rounded(&self) -> bool {
        self.mode == Mode::Rounded
    }

    /// Lower bound used for layout.
    pub fn minimum(&self) -> &Value {
        match self.mode {
            Mode::Exact => &self.minimum,
            Mode::Rounded => self.adjusted_minimum(),
        }
    }

    /// Upper bound used for layout.
    pub fn maximum(&self) -> &Value {
        match self.mode {
            Mode::Exact => &self.maximum,
            Mode::Rounded => self.adjusted_maximum.get_or_init(|| {
                let start = self.adjusted_minimum();
                let span = self.tick_count() as f64 * self.interval;
                match Caster::seconds(start) {
                    Some(seconds) => Caster::from_seconds(seconds + span, start),
                    None => start.clone(),
                }
            }),
        }
    }

    /// Number of intervals from the lower bound to the raw maximum, rounded
    /// up. Zero when the interval is zero.
    pub fn tick_count(&self) -> usize {
        *self.tick_count.get_or_init(|| {
            if !(self.interval > 0.0) {
                return 0;
            }
            let start = Caster::seconds(self.minimum());
            let end = Caster::seconds(&self.maximum);
            match (start, end) {
                (Some(start), Some(end)) => {
                    let range = if self.minimum.is_temporal() {
                        (end - start).abs()
                    } else {
                        end - start
                    };
                    (range / self.interval).ceil().max(0.0) as usize
                }
                _ => 0,
            }
        })
    }

    fn adjusted_minimum(&self) -> &Value {
        self.adjusted_minimum.get_or_init(|| {
            let adjusted = if !(self.interval > 0.0) {
                self.minimum.clone()
            } else if self.minimum.is_temporal() {
                calendar_floor(&self.minimum, self.interval)
            } else {
                let interval = self.interval;
                Caster::casting(&self.minimum, |raw| (raw / interval).floor() * interval)
            };
            tracing::trace!(
                minimum = %self.minimum,
                adjusted = %adjusted,
                interval = self.interval,
                "rounded domain minimum"
            );
            adjusted
        })
    }
}

/// Floors a temporal value to the interval grid, then to the enclosing
/// calendar boundary for the interval's magnitude. The boundary is taken in
/// the value's own offset; dates stay dates.
fn calendar_floor(value: &Value, interval: f64) -> Value {
    let Some(seconds) = Caster::seconds(value) else {
        return value.clone();
    };
    let floored = (seconds / interval).floor() * interval;

    match value {
        Value::Date(_) => {
            let Some(local) = naive_from_seconds(floored) else {
                return value.clone();
            };
            Value::Date(calendar_boundary(local.date(), interval))
        }
        Value::Time(time) => {
            let offset = *time.offset();
            let local_seconds = floored + offset.local_minus_utc() as f64;
            let Some(local) = naive_from_seconds(local_seconds) else {
                return value.clone();
            };
            let boundary = calendar_boundary(local.date(), interval).and_time(NaiveTime::MIN);
            let utc = boundary - Duration::seconds(offset.local_minus_utc() as i64);
            Value::Time(DateTime::<FixedOffset>::from_naive_utc_and_offset(utc, offset))
        }
        _ => value.clone(),
    }
}

fn naive_from_seconds(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp(seconds.floor() as i64, 0).map(|utc| utc.naive_utc())
}

/// Start of the calendar period enclosing `date`.
///
/// | interval        | boundary             |
/// |-----------------|----------------------|
/// | < 2 days        | day                  |
/// | < 2 weeks       | week (Monday)        |
/// | < 2 months      | month                |
/// | < 4 months      | quarter              |
/// | < 10 months     | half year            |
/// | otherwise       | year                 |
fn calendar_boundary(date: NaiveDate, interval: f64) -> NaiveDate {
    let first_of = |month: u32| NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date);

    if interval < 2.0 * DAY {
        date
    } else if interval < 2.0 * WEEK {
        date - Duration::days(date.weekday().num_days_from_monday() as i64)
    } else if interval < 2.0 * MONTH {
        first_of(date.month())
    } else if interval < 4.0 * MONTH {
        first_of((date.month0() / 3) * 3 + 1)
    } else if interval < 10.0 * MONTH {
        first_of(if date.month() < 7 { 1 } else { 7 })
    } else {
        first_of(1)
    }
}
