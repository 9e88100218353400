// src/tests/common.rs

//! Shared fixture datetimes for tests.
//!
//! Fixtures are built from local wall-clock fields, so expected token
//! values are identical on any test machine regardless of its timezone.

use crate::data::datetime::{DateTimeL, Local, TimeZone};

/// 2001-11-17 13:37:22 local. Saturday, day 321, week 47 (week 46 at
/// midnight), fourth quarter.
pub fn dt_2001_11_17() -> DateTimeL {
    Local
        .with_ymd_and_hms(2001, 11, 17, 13, 37, 22)
        .unwrap()
}

/// The same Saturday at 00:00:00; the week index drops to 46 without the
/// time-of-day fraction.
pub fn dt_2001_11_17_midnight() -> DateTimeL {
    Local
        .with_ymd_and_hms(2001, 11, 17, 0, 0, 0)
        .unwrap()
}

/// 1992-04-06 23:48:07 local. Monday, day 97 (leap year), second quarter,
/// hour 23.
pub fn dt_1992_04_06() -> DateTimeL {
    Local
        .with_ymd_and_hms(1992, 4, 6, 23, 48, 7)
        .unwrap()
}

/// 2001-01-01 00:00:00 local. Monday, day 1, week 1.
pub fn dt_2001_01_01() -> DateTimeL {
    Local
        .with_ymd_and_hms(2001, 1, 1, 0, 0, 0)
        .unwrap()
}
