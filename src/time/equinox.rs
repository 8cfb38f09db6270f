use std::ops::RangeInclusive;

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Years for which the closed-form equinox approximation is known to hold.
pub const VALID_YEARS: RangeInclusive<i32> = 1851..=2150;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub enum Equinox {
    Spring,
    Autumn
}

impl Equinox {
    pub fn month(&self) -> Month {
        match self {
            Equinox::Spring => Month::March,
            Equinox::Autumn => Month::September
        }
    }

    fn base(&self, year: i32) -> i32 {
        match (self, year <= 1999) {
            (Equinox::Spring, true) => 2213,
            (Equinox::Spring, false) => 2089,
            (Equinox::Autumn, true) => 2525,
            (Equinox::Autumn, false) => 2395
        }
    }

    /// Equinox date of `year`, or `None` when chrono cannot represent it.
    pub fn date(&self, year: i32) -> Option<NaiveDate> {
        let day = u32::try_from(equinox_day(year, *self)).ok()?;
        NaiveDate::from_ymd_opt(year, self.month().number_from_month(), day)
    }
}

/// Day of month of the March or September equinox:
///
/// ```text
/// (31y + base) / 128 - y / 4 + y / 100
/// ```
///
/// with truncating division. `base` switches at 2000. The formula is only
/// vouched for within [`VALID_YEARS`]; outside it the raw arithmetic is
/// returned without any correction.
///
/// Evaluated in `i64` so that no `i32` year overflows; the result is within
/// half of `|year|` and always fits back into `i32`.
pub fn equinox_day(year: i32, equinox: Equinox) -> i32 {
    let y = i64::from(year);
    let day = (31 * y + i64::from(equinox.base(year))) / 128 - y / 4 + y / 100;
    day as i32
}

pub fn is_within_validity(year: i32) -> bool {
    VALID_YEARS.contains(&year)
}
