// src/data/datetime.rs

//! Datetime aliases, date derivation helpers, and date-input resolution.
//!
//! Every token value is derived from one [`DateTimeL`] snapshot using the
//! helpers here: ordinal day, anchored week-of-year, ordinal-suffixed
//! numbers, zero-padded numbers, and fixed English month and weekday name
//! tables (locale-aware names are out of scope).
//!
//! A caller-supplied date arrives as a [`DateInput`] and is resolved by
//! [`datetime_from_input`]. Date strings are matched against the fixed
//! layout table [`DATETIME_INPUT_PATTERNS`], tried in order; a string
//! matching no layout is an error (arbitrary-format parsing is out of
//! scope).
//!
//! The most relevant documents to understand this file are:
//! - `chrono` crate [`strftime`] format.
//!
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html

#![allow(non_camel_case_types)]

use crate::common::{ResultTemplate, TemplaterError};

#[doc(hidden)]
pub use ::chrono::{
    DateTime,
    Datelike, // adds method `.year()` onto `DateTime`
    Local,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeZone,
    Timelike, // adds method `.hour()` onto `DateTime`
};
use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// datetime typing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A datetime in the local timezone; the snapshot all tokens derive from.
pub type DateTimeL = DateTime<Local>;
/// Optional [`DateTimeL`].
pub type DateTimeLOpt = Option<DateTimeL>;

/// A _Year_ in a date.
pub type Year = i32;
/// 0-indexed month, `0..=11`.
pub type Month0 = u32;
/// Day of the month, `1..=31`.
pub type DayOfMonth = u32;
/// 1-based ordinal day within the calendar year, `1..=366`.
pub type DayOfYear = u32;
/// Weekday index, `0..=6`, `0` is Sunday.
pub type Weekday0 = u32;
/// Week of the year under the January 1 anchor rule (not ISO-8601 weeks).
pub type WeekOfYear = u32;
/// Hour of the day, `0..=23`.
pub type Hour = u32;
/// Minute of the hour, `0..=59`.
pub type Minute = u32;
/// Second of the minute, `0..=59`.
pub type Second = u32;

/// Crate `chrono` [`strftime`] formatting pattern, passed to chrono
/// parse functions.
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
pub type DateTimePattern_str = str;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// name tables
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// English month names, 0-indexed.
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// English weekday names, 0-indexed, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

/// Full English month name for 0-indexed `month0`.
pub fn month_name(month0: Month0) -> &'static str {
    debug_assert_le!(month0, 11);

    MONTH_NAMES[(month0 as usize) % 12]
}

/// Full English weekday name for `weekday0`, `0` is Sunday.
pub fn weekday_name(weekday0: Weekday0) -> &'static str {
    debug_assert_le!(weekday0, 6);

    WEEKDAY_NAMES[(weekday0 as usize) % 7]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// date derivation helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 1-based ordinal day within the calendar year of `dt`.
///
/// Derived from the wall-clock calendar fields, so any daylight-saving
/// offset between `dt` and January 1 cannot skew the count.
pub fn day_of_year(dt: &DateTimeL) -> DayOfYear {
    dt.ordinal()
}

/// Week of the year of `dt`, anchored to January 1 of the local calendar
/// year with Sunday-indexed weekdays. Not ISO-8601 week numbering.
///
/// The day count carries the time-of-day fraction: a date at 13:37 sits
/// `0.567` days past its own midnight, so a boundary Saturday afternoon
/// lands one week past the same Saturday at 00:00. Callers comparing
/// against wall-clock expectations rely on this.
pub fn week_of_year(dt: &DateTimeL) -> WeekOfYear {
    // whole days since January 1
    let days: i64 = (dt.ordinal() as i64) - 1;
    let weekday: i64 = dt.weekday().num_days_from_sunday() as i64;
    // weekday of January 1 of the same year, 0 is Sunday
    let weekday_jan1: i64 = (weekday - days).rem_euclid(7);
    let seconds_of_day: i64 =
        (dt.hour() as i64) * 3600 + (dt.minute() as i64) * 60 + (dt.second() as i64);
    let days_fract: f64 = (days as f64) + (seconds_of_day as f64) / 86400.0;
    let week: WeekOfYear = (((days_fract + (weekday_jan1 as f64) + 1.0) / 7.0).ceil()) as WeekOfYear;
    debug_assert_le!(week, 54);

    week
}

/// `n` followed by its English ordinal suffix.
///
/// ```rust
/// use dttlib::data::datetime::suffixed_number;
///
/// assert_eq!(suffixed_number(1), "1st");
/// assert_eq!(suffixed_number(12), "12th");
/// assert_eq!(suffixed_number(23), "23rd");
/// ```
pub fn suffixed_number(n: u32) -> String {
    let v: u32 = n % 100;
    let suffix: &str = match v {
        11..=13 => "th",
        _ => match v % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };

    format!("{}{}", n, suffix)
}

/// Decimal form of `n` left-padded with `'0'` to at least `digits`
/// characters. Never truncates.
pub fn zero_pad(n: u32, digits: usize) -> String {
    format!("{:0>width$}", n.to_string(), width = digits)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// date-input resolution
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A date accepted by catalog and render operations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DateInput<'a> {
    /// The current moment.
    #[default]
    Now,
    /// An already-constructed datetime.
    DateTime(DateTimeL),
    /// A date/time string; accepted layouts are listed in
    /// [`DATETIME_INPUT_PATTERNS`] (plus RFC 3339).
    Str(&'a str),
}

impl<'a> From<DateTimeL> for DateInput<'a> {
    fn from(dt: DateTimeL) -> DateInput<'a> {
        DateInput::DateTime(dt)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(data: &'a str) -> DateInput<'a> {
        DateInput::Str(data)
    }
}

/// One accepted input layout for [`datetime_from_str`].
pub struct DateTimeInputInstr {
    /// chrono [`strftime`] pattern.
    ///
    /// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
    pub pattern: &'static DateTimePattern_str,
    /// Does `pattern` include a time of day?
    pub has_time: bool,
    /// Does `pattern` include a UTC offset (`%z`)?
    pub has_tz: bool,
}

/// Number of entries in [`DATETIME_INPUT_PATTERNS`].
pub const DATETIME_INPUT_PATTERNS_LEN: usize = 7;

/// Accepted date-string layouts, tried in order; first match wins.
/// Layouts without an offset are interpreted in the local timezone.
pub const DATETIME_INPUT_PATTERNS: [DateTimeInputInstr; DATETIME_INPUT_PATTERNS_LEN] = [
    DateTimeInputInstr { pattern: "%Y-%m-%dT%H:%M:%S%z", has_time: true, has_tz: true },
    DateTimeInputInstr { pattern: "%Y-%m-%d %H:%M:%S%z", has_time: true, has_tz: true },
    DateTimeInputInstr { pattern: "%Y-%m-%dT%H:%M:%S", has_time: true, has_tz: false },
    DateTimeInputInstr { pattern: "%Y-%m-%d %H:%M:%S", has_time: true, has_tz: false },
    DateTimeInputInstr { pattern: "%Y-%m-%dT%H:%M", has_time: true, has_tz: false },
    DateTimeInputInstr { pattern: "%Y-%m-%d %H:%M", has_time: true, has_tz: false },
    DateTimeInputInstr { pattern: "%Y-%m-%d", has_time: false, has_tz: false },
];

/// Resolve a date string to a [`DateTimeL`] against RFC 3339 and then each
/// [`DATETIME_INPUT_PATTERNS`] row in order.
///
/// A string matching no layout returns [`TemplaterError::DateInput`];
/// unparseable input never degrades to a degenerate catalog.
pub fn datetime_from_str(data: &str) -> ResultTemplate<DateTimeL> {
    defn!("({:?})", data);

    // RFC 3339 allows the `Z` offset suffix the `%z` layouts do not
    if let Ok(val) = DateTime::parse_from_rfc3339(data) {
        let dt: DateTimeL = val.with_timezone(&Local);
        defx!("parse_from_rfc3339 matched, return {:?}", dt);
        return Ok(dt);
    }
    for instr in DATETIME_INPUT_PATTERNS.iter() {
        if instr.has_tz {
            if let Ok(val) = DateTime::parse_from_str(data, instr.pattern) {
                let dt: DateTimeL = val.with_timezone(&Local);
                defx!("pattern {:?} matched, return {:?}", instr.pattern, dt);
                return Ok(dt);
            }
            continue;
        }
        let dt_naive: NaiveDateTime = if instr.has_time {
            match NaiveDateTime::parse_from_str(data, instr.pattern) {
                Ok(val) => val,
                Err(_err) => continue,
            }
        } else {
            match NaiveDate::parse_from_str(data, instr.pattern) {
                Ok(val) => val.and_time(NaiveTime::MIN),
                Err(_err) => continue,
            }
        };
        defo!("pattern {:?} matched naive {:?}", instr.pattern, dt_naive);
        match Local
            .from_local_datetime(&dt_naive)
            .earliest()
        {
            Some(dt) => {
                defx!("return {:?}", dt);
                return Ok(dt);
            }
            // a local time skipped by a daylight-saving jump
            None => continue,
        }
    }
    defx!("no layout matched, return Err");

    Err(TemplaterError::DateInput(String::from(data)))
}

/// Resolve a [`DateInput`] to the [`DateTimeL`] snapshot tokens derive
/// from. [`DateInput::Now`] snapshots the current local moment.
pub fn datetime_from_input(input: &DateInput) -> ResultTemplate<DateTimeL> {
    match input {
        DateInput::Now => Ok(Local::now()),
        DateInput::DateTime(dt) => Ok(*dt),
        DateInput::Str(data) => datetime_from_str(data),
    }
}
