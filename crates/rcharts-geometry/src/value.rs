//! Raw chart values and the caster between values and plain magnitudes.
//!
//! Every value that reaches an axis is one of four kinds. Arithmetic on
//! values (subtracting bounds, dividing by a tick interval, flooring) is
//! done on a plain `f64` magnitude and mapped back afterwards:
//!
//! | kind     | magnitude                               |
//! |----------|-----------------------------------------|
//! | `Number` | the number itself                       |
//! | `Date`   | whole days since 1970-01-01             |
//! | `Time`   | seconds since the Unix epoch            |
//! | `Label`  | none, labels are never cast             |
//!
//! ```
//! use rcharts_geometry::{Caster, Value};
//!
//! let value = Value::from(23.0);
//! let floored = Caster::casting(&value, |raw| (raw / 5.0).floor() * 5.0);
//! assert_eq!(floored, Value::from(20.0));
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A raw, ordered chart value.
///
/// Values of the same kind compare naturally. Values of different kinds are
/// unordered and `partial_cmp` returns `None`.
#[derive(Debug, Clone)]
pub enum Value {
    /// A plain number.
    Number(f64),
    /// A calendar date without time of day.
    Date(NaiveDate),
    /// A timestamp carrying its UTC offset.
    Time(DateTime<FixedOffset>),
    /// A categorical label.
    Label(String),
}

impl Value {
    /// The number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this value is a categorical label.
    pub fn is_label(&self) -> bool {
        matches!(self, Value::Label(_))
    }

    /// Whether this value is a date or a timestamp.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Value::Date(_) | Value::Time(_))
    }

    /// Whether the value is a number strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        matches!(self, Value::Number(n) if *n > 0.0)
    }

    /// Whether the value is a number strictly less than zero.
    pub fn is_negative(&self) -> bool {
        matches!(self, Value::Number(n) if *n < 0.0)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Label(a), Value::Label(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Number(n) => {
                // 0.0 and -0.0 are equal, so they must hash alike
                let canonical = if *n == 0.0 {
                    0.0f64
                } else if n.is_nan() {
                    f64::NAN
                } else {
                    *n
                };
                canonical.to_bits().hash(state);
            }
            Value::Date(d) => d.hash(state),
            Value::Time(t) => t.hash(state),
            Value::Label(s) => s.hash(state),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Date(a), Value::Date(b)) => a.partial_cmp(b),
            (Value::Time(a), Value::Time(b)) => a.partial_cmp(b),
            (Value::Label(a), Value::Label(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Date(d) => write!(f, "{}", d),
            Value::Time(t) => write!(f, "{}", t),
            Value::Label(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Label(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Label(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Time(value)
    }
}

/// Bidirectional mapping between values and `f64` magnitudes.
///
/// `upcast(downcast(v), v)` reproduces `v` for numbers, dates and
/// timestamps with whole-microsecond fractions. Sub-microsecond timestamps
/// come back rounded to the nearest microsecond, since an `f64` count of
/// epoch seconds cannot hold nanoseconds for present-day instants.
pub struct Caster;

impl Caster {
    /// Magnitude of a value. Labels have none.
    pub fn downcast(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => Some(*n),
            Value::Date(d) => Some((d.num_days_from_ce() as i64 - UNIX_EPOCH_DAYS_FROM_CE) as f64),
            Value::Time(t) => {
                Some(t.timestamp() as f64 + t.timestamp_subsec_nanos() as f64 * 1e-9)
            }
            Value::Label(_) => None,
        }
    }

    /// Rebuild a value of the reference's kind from a magnitude.
    ///
    /// Dates drop the day fraction. Timestamps keep the reference's offset and
    /// round to the microsecond. Labels pass through unchanged, as does any
    /// magnitude outside the calendar's range.
    pub fn upcast(raw: f64, reference: &Value) -> Value {
        match reference {
            Value::Number(_) => Value::Number(raw),
            Value::Date(_) => date_from_days(raw)
                .map(Value::Date)
                .unwrap_or_else(|| reference.clone()),
            Value::Time(t) => time_from_seconds(raw, *t.offset())
                .map(Value::Time)
                .unwrap_or_else(|| reference.clone()),
            Value::Label(_) => reference.clone(),
        }
    }

    /// Apply `f` to the value's magnitude and cast the result back.
    pub fn casting(value: &Value, f: impl FnOnce(f64) -> f64) -> Value {
        match Self::downcast(value) {
            Some(raw) => Self::upcast(f(raw), value),
            None => value.clone(),
        }
    }

    /// Seconds since the Unix epoch, with dates taken at midnight UTC.
    ///
    /// Numbers are returned as is so that numeric and temporal arithmetic can
    /// share one code path.
    pub fn seconds(value: &Value) -> Option<f64> {
        match value {
            Value::Date(_) => Self::downcast(value).map(|days| days * SECONDS_PER_DAY),
            _ => Self::downcast(value),
        }
    }

    /// Inverse of [`Caster::seconds`].
    pub fn from_seconds(seconds: f64, reference: &Value) -> Value {
        match reference {
            Value::Date(_) => Self::upcast((seconds / SECONDS_PER_DAY).floor(), reference),
            _ => Self::upcast(seconds, reference),
        }
    }
}

fn date_from_days(raw: f64) -> Option<NaiveDate> {
    if !raw.is_finite() {
        return None;
    }
    let days = raw.floor() as i64 + UNIX_EPOCH_DAYS_FROM_CE;
    NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)
}

fn time_from_seconds(raw: f64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if !raw.is_finite() {
        return None;
    }
    let mut secs = raw.floor();
    let mut micros = ((raw - secs) * 1e6).round();
    if micros >= 1e6 {
        secs += 1.0;
        micros = 0.0;
    }
    DateTime::from_timestamp(secs as i64, micros as u32 * 1_000).map(|utc| utc.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn test_numbers_are_identity() {
        assert_eq!(Caster::downcast(&Value::from(15.3)), Some(15.3));
        assert_eq!(Caster::upcast(4.5, &Value::from(1.0)), Value::from(4.5));
    }

    #[test]
    fn test_date_magnitude_counts_days_from_epoch() {
        let epoch = Value::from(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        let later = Value::from(NaiveDate::from_ymd_opt(1970, 1, 11).unwrap());

        assert_eq!(Caster::downcast(&epoch), Some(0.0));
        assert_eq!(Caster::downcast(&later), Some(10.0));
    }

    #[test]
    fn test_date_round_trip() {
        let date = Value::from(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        let raw = Caster::downcast(&date).unwrap();

        assert_eq!(Caster::upcast(raw, &date), date);
    }

    #[test]
    fn test_date_upcast_drops_day_fraction() {
        let date = Value::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let raw = Caster::downcast(&date).unwrap();

        assert_eq!(Caster::upcast(raw + 0.75, &date), date);
    }

    #[test]
    fn test_time_round_trip_keeps_offset() {
        let time = offset(5)
            .with_ymd_and_hms(2023, 6, 15, 13, 45, 10)
            .unwrap()
            + chrono::Duration::microseconds(123_456);
        let value = Value::from(time);
        let raw = Caster::downcast(&value).unwrap();

        let restored = Caster::upcast(raw, &value);
        assert_eq!(restored, value);
        match restored {
            Value::Time(t) => assert_eq!(t.offset(), &offset(5)),
            other => panic!("expected a time, got {other:?}"),
        }
    }

    #[test]
    fn test_time_round_trip_rounds_to_microseconds() {
        let time = offset(-3)
            .with_ymd_and_hms(2023, 6, 15, 13, 45, 10)
            .unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let value = Value::from(time);
        let raw = Caster::downcast(&value).unwrap();

        match Caster::upcast(raw, &value) {
            Value::Time(t) => {
                assert_eq!(t.timestamp_subsec_nanos(), 123_457_000);
                assert_eq!(t.timestamp(), time.timestamp());
                assert_eq!(t.offset(), &offset(-3));
            }
            other => panic!("expected a time, got {other:?}"),
        }
    }

    #[test]
    fn test_casting_floors_time_to_the_hour() {
        let time = Value::from(offset(0).with_ymd_and_hms(2023, 6, 15, 13, 45, 10).unwrap());
        let floored = Caster::casting(&time, |raw| (raw / 3600.0).floor() * 3600.0);

        assert_eq!(
            floored,
            Value::from(offset(0).with_ymd_and_hms(2023, 6, 15, 13, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_labels_pass_through() {
        let label = Value::from("Apples");

        assert_eq!(Caster::downcast(&label), None);
        assert_eq!(Caster::upcast(3.0, &label), label);
        assert_eq!(Caster::casting(&label, |raw| raw * 2.0), label);
    }

    #[test]
    fn test_date_seconds_are_midnight_utc() {
        let date = Value::from(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());

        assert_eq!(Caster::seconds(&date), Some(86_400.0));
        assert_eq!(Caster::from_seconds(86_400.0 * 1.5, &date), date);
    }

    #[test]
    fn test_mixed_kinds_are_unordered() {
        assert_eq!(Value::from(1.0).partial_cmp(&Value::from("a")), None);
        assert!(Value::from(1.0) < Value::from(2.0));
    }

    #[test]
    fn test_zero_and_negative_zero_share_a_key() {
        let mut map = rcharts_core::alloc::IndexMap::new();
        map.insert(Value::from(0.0), 1);
        map.insert(Value::from(-0.0), 2);

        assert_eq!(map.len(), 1);
    }
}
