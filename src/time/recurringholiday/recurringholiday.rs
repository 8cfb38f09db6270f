use chrono::{Datelike, NaiveDate};

use crate::holidayerror::HolidayError;
use super::citizensholiday::CitizensHoliday;
use super::equinoxholiday::EquinoxHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;

pub trait RecurringHoliday {

    /// The date this rule yields in `year`, or `None` when its conditions
    /// are not met that year.
    fn get_holiday(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError>;

    fn is_holiday(&self, d: &NaiveDate) -> Result<bool, HolidayError> {
        Ok(self.get_holiday(d.year())? == Some(*d))
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RecurringHolidayVariant {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday),
    Equinox(EquinoxHoliday),
    Citizens(CitizensHoliday)
}

impl RecurringHoliday for RecurringHolidayVariant {
    fn get_holiday(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        match self {
            RecurringHolidayVariant::FixedDate(h) => h.get_holiday(year),
            RecurringHolidayVariant::NthWeekday(h) => h.get_holiday(year),
            RecurringHolidayVariant::Equinox(h) => h.get_holiday(year),
            RecurringHolidayVariant::Citizens(h) => h.get_holiday(year)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};

    #[test]
    fn test_is_holiday() {
        let rule = RecurringHolidayVariant::NthWeekday(
            NthWeekdayHoliday::new(Month::January, 2, Weekday::Mon).unwrap()
        );
        let d = NaiveDate::from_ymd_opt(2013, 1, 14).unwrap();
        assert!(rule.is_holiday(&d).unwrap());
        assert!(!rule.is_holiday(&d.pred_opt().unwrap()).unwrap());
    }
}
