use chrono::{DateTime, Month, TimeZone};

use crate::holidayerror::HolidayError;
use crate::time::holiday::Holiday;
use crate::time::utility::{ymd, JST, MONTHS};

use super::holidaycalendar::HolidayCalendar;
use super::holidayrule::holiday_rules;
use super::substituteholiday::apply_substitute_holiday;

/// Japanese national holidays under the law in force each year from 1948.
///
/// Accuracy before 1948 is not defined by any rule, and the equinox holidays
/// after 2150 rely on an approximation that is not vouched for there. Such
/// years are computed anyway, without correction.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseHolidayCalendar;

impl HolidayCalendar for JapaneseHolidayCalendar {
    fn get_holidays(&self, year: i32, month: Month) -> Result<Vec<Holiday>, HolidayError> {
        get_holidays(year, month)
    }
}

/// Holidays of `year`/`month` including substitute holidays, date-ascending.
pub fn get_holidays(year: i32, month: Month) -> Result<Vec<Holiday>, HolidayError> {
    // fail early on years chrono cannot represent
    ymd(year, month, 1)?;

    let mut holidays = Vec::new();
    for rule in holiday_rules(month) {
        if let Some(d) = rule.apply(year)? {
            log::trace!("{} on {}", rule.name(), d);
            holidays.push(Holiday::from_naive_date(d, rule.name())?);
        }
    }
    debug_assert!(holidays.windows(2).all(|w| w[0].date() < w[1].date()));

    apply_substitute_holiday(&holidays)
}

/// As [`get_holidays`] with the month given as 1 to 12.
pub fn get_holidays_of_month_number(year: i32, month: u32) -> Result<Vec<Holiday>, HolidayError> {
    let m = month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .ok_or(HolidayError::InvalidMonth(month))?;
    get_holidays(year, *m)
}

pub fn get_holidays_of_year(year: i32) -> Result<Vec<Holiday>, HolidayError> {
    JapaneseHolidayCalendar.get_holidays_of_year(year)
}

/// Name of the first holiday whose JST calendar day matches that of `date`.
/// The time of day is ignored; `None` means no holiday matches.
pub fn find_holiday_name<'a, Tz: TimeZone>(holidays: &'a [Holiday], date: &DateTime<Tz>) -> Option<&'a str> {
    let d = date.with_timezone(&JST).date_naive();
    holidays
        .iter()
        .find(|h| h.naive_date() == d)
        .map(|h| h.name())
}
