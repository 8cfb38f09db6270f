use chrono::{
    Month,
    NaiveDate,
    Weekday
};

use crate::holidayerror::HolidayError;
use crate::time::utility::ymd;
use super::recurringholiday::RecurringHoliday;

/// The `n`-th `weekday` of a month, e.g. the 2nd Monday of January.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NthWeekdayHoliday {
    month: Month,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    /// `None` unless `n` is in `1..=5`.
    pub const fn new(month: Month, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if n < 1 || n > 5 {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    /// First occurrence of the weekday in the month, then `n - 1` weeks on.
    /// `None` when the month has fewer than `n` such weekdays.
    fn get_holiday(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        ymd(year, self.month, 1)?;
        Ok(NaiveDate::from_weekday_of_month_opt(
            year,
            self.month.number_from_month(),
            self.weekday,
            self.n
        ))
    }
}
