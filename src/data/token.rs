// src/data/token.rs

//! The fixed token catalog: 35 codes mapping a date snapshot to substitution
//! values.
//!
//! The catalog is declared once as the const instruction table
//! [`TOKEN_CATALOG`]; [`token_catalog_dt`] interprets the table against a
//! [`DateTimeL`] snapshot and returns owned [`Token`]s, values computed
//! with the helpers in [`crate::data::datetime`]. The catalog is
//! regenerated fresh on every call; it is deterministic and total for a
//! given snapshot (every code always appears).
//!
//! Table order is significant: the substitution scanner tries codes in
//! table order at each text position, so the ordering invariant documented
//! at [`TOKEN_CATALOG`] is what makes first-match equal longest-match.
//!
//! [`DateTimeL`]: crate::data::datetime::DateTimeL

use crate::common::ResultTemplate;
use crate::data::datetime::{
    datetime_from_input,
    month_name,
    suffixed_number,
    weekday_name,
    week_of_year,
    zero_pad,
    DateInput,
    DateTimeL,
    Datelike,
    Hour,
    Month0,
    Timelike,
    Year,
};

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Token and TokenValue
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A token code literal, e.g. `"MMMM"`, `"hh"`.
#[allow(non_camel_case_types)]
pub type TokenCode_str = str;

/// A computed token value; numeric codes stay numeric (`M` is `4`, not
/// `"04"`), everything else is a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenValue {
    Num(i64),
    Str(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Num(n) => write!(f, "{}", n),
            TokenValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// One catalog row for one date snapshot: the code, its computed value,
/// a human description, and example renderings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub code: &'static TokenCode_str,
    pub value: TokenValue,
    pub description: &'static str,
    pub example: &'static str,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// the catalog instruction table
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// How to compute one catalog row's value from the date snapshot.
/// Interpreted by [`token_value`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    MonthName,
    MonthAbbr,
    MonthPadded,
    MonthSuffixed,
    MonthNumber,
    QuarterSuffixed,
    QuarterNumber,
    DayOfYearPadded,
    DayOfYearSuffixed,
    DayOfYearNumber,
    DayOfMonthPadded,
    DayOfMonthSuffixed,
    DayOfMonthNumber,
    WeekdayName,
    WeekdayAbbr3,
    WeekdayAbbr2,
    WeekdaySuffixed,
    WeekdayNumber,
    WeekPadded,
    WeekSuffixed,
    WeekNumber,
    YearFull,
    YearShort,
    MeridiemUpper,
    MeridiemLower,
    Hour24From1Padded,
    Hour24From1,
    Hour12Padded,
    Hour12,
    Hour24Padded,
    Hour24,
    MinutePadded,
    MinuteNumber,
    SecondPadded,
    SecondNumber,
}

/// One row of [`TOKEN_CATALOG`].
pub struct TokenInstr {
    /// Literal code matched inside a placeholder.
    pub code: &'static TokenCode_str,
    /// How the value is computed; see [`token_value`].
    pub kind: TokenKind,
    /// Human description of the code.
    pub description: &'static str,
    /// Example renderings of the code.
    pub example: &'static str,
}

/// Number of entries in [`TOKEN_CATALOG`].
pub const TOKEN_CATALOG_LEN: usize = 35;

/// The fixed, ordered token catalog.
///
/// Ordering invariant: within the table, no code is a proper prefix of any
/// later code (each family is listed longest form first, `MMMM` before
/// `MMM` before `MM` before `Mo` before `M`). First-match in table order is
/// therefore longest-match; the substitution scanner depends on this.
/// Checked by a test.
pub const TOKEN_CATALOG: [TokenInstr; TOKEN_CATALOG_LEN] = [
    // Month
    TokenInstr {
        code: "MMMM",
        kind: TokenKind::MonthName,
        description: "Month",
        example: "January February ... November December",
    },
    TokenInstr {
        code: "MMM",
        kind: TokenKind::MonthAbbr,
        description: "Month (3 characters)",
        example: "Jan Feb ... Nov Dec",
    },
    TokenInstr {
        code: "MM",
        kind: TokenKind::MonthPadded,
        description: "Month Number (Padded)",
        example: "01 02 ... 11 12",
    },
    TokenInstr {
        code: "Mo",
        kind: TokenKind::MonthSuffixed,
        description: "Month Number (Suffixed)",
        example: "1st 2nd ... 11th 12th",
    },
    TokenInstr {
        code: "M",
        kind: TokenKind::MonthNumber,
        description: "Month Number",
        example: "1 2 ... 11 12",
    },
    // Quarter
    TokenInstr {
        code: "Qo",
        kind: TokenKind::QuarterSuffixed,
        description: "Quarter (Suffixed)",
        example: "1st 2nd 3rd 4th",
    },
    TokenInstr {
        code: "Q",
        kind: TokenKind::QuarterNumber,
        description: "Quarter",
        example: "1 2 3 4",
    },
    // Day of Year
    TokenInstr {
        code: "DDDD",
        kind: TokenKind::DayOfYearPadded,
        description: "Day of Year (Padded)",
        example: "001 002 ... 364 365",
    },
    TokenInstr {
        code: "DDDo",
        kind: TokenKind::DayOfYearSuffixed,
        description: "Day of Year (Suffixed)",
        example: "1st 2nd ... 364th 365th",
    },
    TokenInstr {
        code: "DDD",
        kind: TokenKind::DayOfYearNumber,
        description: "Day of Year",
        example: "1 2 ... 364 365",
    },
    // Day of Month
    TokenInstr {
        code: "DD",
        kind: TokenKind::DayOfMonthPadded,
        description: "Day of Month (Padded)",
        example: "01 02 ... 30 31",
    },
    TokenInstr {
        code: "Do",
        kind: TokenKind::DayOfMonthSuffixed,
        description: "Day of Month (Suffixed)",
        example: "1st 2nd ... 30th 31st",
    },
    TokenInstr {
        code: "D",
        kind: TokenKind::DayOfMonthNumber,
        description: "Day of Month",
        example: "1 2 ... 30 31",
    },
    // Day of Week
    TokenInstr {
        code: "dddd",
        kind: TokenKind::WeekdayName,
        description: "Day of Week",
        example: "Sunday Monday ... Friday Saturday",
    },
    TokenInstr {
        code: "ddd",
        kind: TokenKind::WeekdayAbbr3,
        description: "Day of Week (3 characters)",
        example: "Sun Mon ... Fri Sat",
    },
    TokenInstr {
        code: "dd",
        kind: TokenKind::WeekdayAbbr2,
        description: "Day of Week (2 characters)",
        example: "Su Mo ... Fr Sa",
    },
    TokenInstr {
        code: "do",
        kind: TokenKind::WeekdaySuffixed,
        description: "Day of Week Number (Suffixed)",
        example: "0th 1st ... 5th 6th",
    },
    TokenInstr {
        code: "d",
        kind: TokenKind::WeekdayNumber,
        description: "Day of Week Number",
        example: "0 1 ... 5 6",
    },
    // Week of Year
    TokenInstr {
        code: "ww",
        kind: TokenKind::WeekPadded,
        description: "Week of Year (Padded)",
        example: "01 02 ... 52 53",
    },
    TokenInstr {
        code: "wo",
        kind: TokenKind::WeekSuffixed,
        description: "Week of Year (Suffixed)",
        example: "1st 2nd ... 52nd 53rd",
    },
    TokenInstr {
        code: "w",
        kind: TokenKind::WeekNumber,
        description: "Week of Year",
        example: "1 2 ... 52 53",
    },
    // Year
    TokenInstr {
        code: "YYYY",
        kind: TokenKind::YearFull,
        description: "Year",
        example: "1970 1971 ... 2029 2030",
    },
    TokenInstr {
        code: "YY",
        kind: TokenKind::YearShort,
        description: "Year (2 characters)",
        example: "70 71 ... 29 30",
    },
    // AM/PM
    TokenInstr {
        code: "A",
        kind: TokenKind::MeridiemUpper,
        description: "AM/PM",
        example: "AM PM",
    },
    TokenInstr {
        code: "a",
        kind: TokenKind::MeridiemLower,
        description: "am/pm",
        example: "am pm",
    },
    // Hour
    TokenInstr {
        code: "kk",
        kind: TokenKind::Hour24From1Padded,
        description: "Hour (24 hours/Padded)",
        example: "01 02 ... 23 24",
    },
    TokenInstr {
        code: "k",
        kind: TokenKind::Hour24From1,
        description: "Hour (24 hours)",
        example: "1 2 ... 23 24",
    },
    TokenInstr {
        code: "hh",
        kind: TokenKind::Hour12Padded,
        description: "Hour (12 hours/Padded)",
        example: "01 02 ... 11 12",
    },
    TokenInstr {
        code: "h",
        kind: TokenKind::Hour12,
        description: "Hour (12 hours)",
        example: "1 2 ... 11 12",
    },
    TokenInstr {
        code: "HH",
        kind: TokenKind::Hour24Padded,
        description: "Hour (24 hours/0-Index/Padded)",
        example: "00 01 ... 22 23",
    },
    TokenInstr {
        code: "H",
        kind: TokenKind::Hour24,
        description: "Hour (24 hours/0-Index)",
        example: "0 1 ... 22 23",
    },
    // Minute
    TokenInstr {
        code: "mm",
        kind: TokenKind::MinutePadded,
        description: "Minute (Padded)",
        example: "00 01 ... 58 59",
    },
    TokenInstr {
        code: "m",
        kind: TokenKind::MinuteNumber,
        description: "Minute",
        example: "0 1 ... 58 59",
    },
    // Second
    TokenInstr {
        code: "ss",
        kind: TokenKind::SecondPadded,
        description: "Second (Padded)",
        example: "00 01 ... 58 59",
    },
    TokenInstr {
        code: "s",
        kind: TokenKind::SecondNumber,
        description: "Second",
        example: "0 1 ... 58 59",
    },
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// table interpretation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 1-based quarter for 0-indexed `month0`.
fn quarter(month0: Month0) -> u32 {
    (month0 + 3) / 3
}

/// 12-hour clock form of a 0-indexed `hour`, `1..=12`.
fn hour12(hour: Hour) -> Hour {
    (hour + 11) % 12 + 1
}

/// Decimal form of `year` with the first two characters removed
/// (`2001` becomes `"01"`).
fn year_short(year: Year) -> String {
    let year_s: String = year.to_string();

    match year_s.get(2..) {
        Some(short) => String::from(short),
        None => String::new(),
    }
}

/// Compute one catalog row's value from the date snapshot `dt`.
pub fn token_value(
    kind: TokenKind,
    dt: &DateTimeL,
) -> TokenValue {
    match kind {
        TokenKind::MonthName => TokenValue::Str(String::from(month_name(dt.month0()))),
        TokenKind::MonthAbbr => TokenValue::Str(String::from(&month_name(dt.month0())[..3])),
        TokenKind::MonthPadded => TokenValue::Str(zero_pad(dt.month(), 2)),
        TokenKind::MonthSuffixed => TokenValue::Str(suffixed_number(dt.month())),
        TokenKind::MonthNumber => TokenValue::Num(dt.month() as i64),
        TokenKind::QuarterSuffixed => TokenValue::Str(suffixed_number(quarter(dt.month0()))),
        TokenKind::QuarterNumber => TokenValue::Num(quarter(dt.month0()) as i64),
        TokenKind::DayOfYearPadded => TokenValue::Str(zero_pad(dt.ordinal(), 3)),
        TokenKind::DayOfYearSuffixed => TokenValue::Str(suffixed_number(dt.ordinal())),
        TokenKind::DayOfYearNumber => TokenValue::Num(dt.ordinal() as i64),
        TokenKind::DayOfMonthPadded => TokenValue::Str(zero_pad(dt.day(), 2)),
        TokenKind::DayOfMonthSuffixed => TokenValue::Str(suffixed_number(dt.day())),
        TokenKind::DayOfMonthNumber => TokenValue::Num(dt.day() as i64),
        TokenKind::WeekdayName => {
            TokenValue::Str(String::from(weekday_name(dt.weekday().num_days_from_sunday())))
        }
        TokenKind::WeekdayAbbr3 => {
            TokenValue::Str(String::from(&weekday_name(dt.weekday().num_days_from_sunday())[..3]))
        }
        TokenKind::WeekdayAbbr2 => {
            TokenValue::Str(String::from(&weekday_name(dt.weekday().num_days_from_sunday())[..2]))
        }
        TokenKind::WeekdaySuffixed => {
            TokenValue::Str(suffixed_number(dt.weekday().num_days_from_sunday()))
        }
        TokenKind::WeekdayNumber => {
            TokenValue::Num(dt.weekday().num_days_from_sunday() as i64)
        }
        TokenKind::WeekPadded => TokenValue::Str(zero_pad(week_of_year(dt), 2)),
        TokenKind::WeekSuffixed => TokenValue::Str(suffixed_number(week_of_year(dt))),
        TokenKind::WeekNumber => TokenValue::Num(week_of_year(dt) as i64),
        TokenKind::YearFull => TokenValue::Num(dt.year() as i64),
        TokenKind::YearShort => TokenValue::Str(year_short(dt.year())),
        TokenKind::MeridiemUpper => {
            TokenValue::Str(String::from(if dt.hour() >= 12 { "PM" } else { "AM" }))
        }
        TokenKind::MeridiemLower => {
            TokenValue::Str(String::from(if dt.hour() >= 12 { "pm" } else { "am" }))
        }
        TokenKind::Hour24From1Padded => TokenValue::Str(zero_pad(dt.hour() + 1, 2)),
        TokenKind::Hour24From1 => TokenValue::Num((dt.hour() + 1) as i64),
        TokenKind::Hour12Padded => TokenValue::Str(zero_pad(hour12(dt.hour()), 2)),
        TokenKind::Hour12 => TokenValue::Num(hour12(dt.hour()) as i64),
        TokenKind::Hour24Padded => TokenValue::Str(zero_pad(dt.hour(), 2)),
        TokenKind::Hour24 => TokenValue::Num(dt.hour() as i64),
        TokenKind::MinutePadded => TokenValue::Str(zero_pad(dt.minute(), 2)),
        TokenKind::MinuteNumber => TokenValue::Num(dt.minute() as i64),
        TokenKind::SecondPadded => TokenValue::Str(zero_pad(dt.second(), 2)),
        TokenKind::SecondNumber => TokenValue::Num(dt.second() as i64),
    }
}

/// Build the ordered token catalog for the snapshot `dt`.
///
/// Total for any valid snapshot: one [`Token`] per [`TOKEN_CATALOG`] row,
/// in table order.
pub fn token_catalog_dt(dt: &DateTimeL) -> Vec<Token> {
    defñ!("({:?})", dt);

    TOKEN_CATALOG
        .iter()
        .map(|instr| Token {
            code: instr.code,
            value: token_value(instr.kind, dt),
            description: instr.description,
            example: instr.example,
        })
        .collect()
}

/// Build the ordered token catalog for a [`DateInput`].
///
/// ```rust
/// use dttlib::data::datetime::DateInput;
/// use dttlib::data::token::{token_catalog, TokenValue, TOKEN_CATALOG_LEN};
///
/// let tokens = token_catalog(&DateInput::Str("2001-11-17T13:37:22")).unwrap();
/// assert_eq!(tokens.len(), TOKEN_CATALOG_LEN);
/// assert_eq!(tokens[0].code, "MMMM");
/// assert_eq!(tokens[0].value, TokenValue::Str(String::from("November")));
/// ```
pub fn token_catalog(input: &DateInput) -> ResultTemplate<Vec<Token>> {
    let dt: DateTimeL = datetime_from_input(input)?;

    Ok(token_catalog_dt(&dt))
}
