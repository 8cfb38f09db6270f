use chrono::{
    DateTime,
    Datelike,
    Days,
    FixedOffset,
    Month,
    NaiveDate,
    NaiveTime,
    TimeZone,
    Weekday
};

use crate::holidayerror::HolidayError;

const ONE_DAY: Days = Days::new(1);

pub const JST_OFFSET_SECONDS: i32 = 9 * 60 * 60;

/// Japan Standard Time (UTC+9). Every holiday date is pinned to this offset,
/// never to the host's local zone.
pub const JST: FixedOffset = match FixedOffset::east_opt(JST_OFFSET_SECONDS) {
    Some(offset) => offset,
    None => panic!("UTC+9 is a valid fixed offset"),
};

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December
];

pub fn ymd(year: i32, month: Month, day: u32) -> Result<NaiveDate, HolidayError> {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
        .ok_or_else(|| HolidayError::date_out_of_range(year, month, day as i32))
}

/// Midnight of `d` in JST.
pub fn jst_midnight(d: NaiveDate) -> Result<DateTime<FixedOffset>, HolidayError> {
    JST.from_local_datetime(&d.and_time(NaiveTime::MIN))
        .single()
        .ok_or_else(|| out_of_range(d))
}

pub fn next_day(d: NaiveDate) -> Result<NaiveDate, HolidayError> {
    d.checked_add_days(ONE_DAY).ok_or_else(|| out_of_range(d))
}

pub fn previous_day(d: NaiveDate) -> Result<NaiveDate, HolidayError> {
    d.checked_sub_days(ONE_DAY).ok_or_else(|| out_of_range(d))
}

#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Tuesday through Friday, the only weekdays on which a day wedged between
/// two holidays becomes a citizens' holiday.
#[inline]
pub fn is_between_tuesday_and_friday(weekday: Weekday) -> bool {
    (1..=4).contains(&weekday.num_days_from_monday())
}

fn out_of_range(d: NaiveDate) -> HolidayError {
    HolidayError::DateOutOfRange {
        year: d.year(),
        month: d.month(),
        day: d.day() as i32
    }
}
