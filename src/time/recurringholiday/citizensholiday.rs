use chrono::{
    Datelike,
    Month,
    NaiveDate,
    Weekday
};

use crate::holidayerror::HolidayError;
use crate::time::equinox::Equinox;
use crate::time::utility::{is_between_tuesday_and_friday, next_day, ymd};
use super::equinoxholiday::EquinoxHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;

/// A weekday wedged between two national holidays.
///
/// Only the two historical cases are modelled, each exactly as the law
/// produced it:
/// - `GoldenWeek`: May 4, between Constitution Memorial Day and Children's Day.
/// - `SilverWeek`: the day after Respect for the Aged Day when it is also the
///   day before the autumnal equinox.
///
/// In both cases the day must fall on Tuesday to Friday.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CitizensHoliday {
    GoldenWeek,
    SilverWeek
}

const RESPECT_FOR_THE_AGED_DAY: NthWeekdayHoliday = match NthWeekdayHoliday::new(Month::September, 3, Weekday::Mon) {
    Some(holiday) => holiday,
    None => panic!("n must be in 1..=5"),
};
const AUTUMNAL_EQUINOX: EquinoxHoliday = EquinoxHoliday::new(Equinox::Autumn);

impl CitizensHoliday {
    fn candidate(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        match self {
            CitizensHoliday::GoldenWeek => ymd(year, Month::May, 4).map(Some),
            CitizensHoliday::SilverWeek => {
                let Some(respect_for_the_aged_day) = RESPECT_FOR_THE_AGED_DAY.get_holiday(year)? else {
                    return Ok(None);
                };
                let d = next_day(respect_for_the_aged_day)?;
                let equinox = AUTUMNAL_EQUINOX.get_holiday(year)?;
                if equinox == Some(next_day(d)?) {
                    Ok(Some(d))
                } else {
                    Ok(None)
                }
            }
        }
    }
}

impl RecurringHoliday for CitizensHoliday {
    fn get_holiday(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        Ok(self
            .candidate(year)?
            .filter(|d| is_between_tuesday_and_friday(d.weekday())))
    }
}
