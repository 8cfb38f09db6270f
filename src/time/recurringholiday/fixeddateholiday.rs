use chrono::{Month, NaiveDate};

use crate::holidayerror::HolidayError;
use crate::time::utility::ymd;
use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct FixedDateHoliday {
    month: Month,
    day: u32
}

impl FixedDateHoliday {
    pub const fn new(month: Month, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        ymd(year, self.month, self.day).map(Some)
    }
}
