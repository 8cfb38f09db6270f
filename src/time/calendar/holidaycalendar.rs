use chrono::{
    DateTime,
    Datelike,
    Month,
    NaiveDate,
    TimeZone
};

use crate::holidayerror::HolidayError;
use crate::time::holiday::Holiday;
use crate::time::utility::{is_weekend, next_day, previous_day, JST, MONTHS};

use super::japaneseholidaycalendar::find_holiday_name;

pub trait HolidayCalendar: Send + Sync {
    /// Holidays of one month, date-ascending.
    fn get_holidays(&self, year: i32, month: Month) -> Result<Vec<Holiday>, HolidayError>;

    fn get_holidays_of_year(&self, year: i32) -> Result<Vec<Holiday>, HolidayError> {
        let mut holidays = Vec::with_capacity(24);
        for month in MONTHS {
            holidays.extend(self.get_holidays(year, month)?);
        }
        Ok(holidays)
    }

    /// Name of the holiday on the JST calendar day of `date`, if any.
    fn holiday_name<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Result<Option<String>, HolidayError>
    where
        Self: Sized
    {
        let d = date.with_timezone(&JST).date_naive();
        let holidays = self.get_holidays(d.year(), month_of(d))?;
        Ok(find_holiday_name(&holidays, date).map(str::to_owned))
    }

    fn is_holiday(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        let holidays = self.get_holidays(d.year(), month_of(d))?;
        Ok(holidays.iter().any(|h| h.naive_date() == d))
    }

    /// Neither a weekend nor a holiday.
    fn is_business_day(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        Ok(!is_weekend(d) && !self.is_holiday(d)?)
    }

    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate, HolidayError> {
        let shift_one_day = if n >= 0 {
            next_day
        } else {
            previous_day
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            m -= self.is_business_day(d)? as u32;
        }
        Ok(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, HolidayError> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, HolidayError> {
        self.shift_n_business_day(d, -1)
    }
}

fn month_of(d: NaiveDate) -> Month {
    MONTHS[d.month0() as usize]
}
