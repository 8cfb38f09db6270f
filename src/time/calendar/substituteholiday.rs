use chrono::Weekday;

use crate::holidayerror::HolidayError;
use crate::time::holiday::{Holiday, SUBSTITUTE_HOLIDAY};
use crate::time::utility::next_day;

/// Inserts a substitute holiday (振替休日) after every holiday on a Sunday.
///
/// `holidays` must be date-ascending. When a copied holiday is a Sunday the
/// holidays directly following it day by day are copied as well, and the
/// substitute lands on the first day after that run.
pub fn apply_substitute_holiday(holidays: &[Holiday]) -> Result<Vec<Holiday>, HolidayError> {
    let mut result: Vec<Holiday> = Vec::with_capacity(holidays.len() + 1);
    let mut i = 0;
    while i < holidays.len() {
        let holiday = &holidays[i];
        result.push(holiday.clone());
        i += 1;

        if holiday.weekday() != Weekday::Sun {
            continue;
        }

        let mut d = next_day(holiday.naive_date())?;
        while i < holidays.len() && holidays[i].naive_date() == d {
            result.push(holidays[i].clone());
            d = next_day(d)?;
            i += 1;
        }
        log::debug!("{} falls on a Sunday, substitute holiday on {}", holiday, d);
        result.push(Holiday::from_naive_date(d, SUBSTITUTE_HOLIDAY)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::time::holiday::*;

    fn holiday(year: i32, month: u32, day: u32, name: &str) -> Holiday {
        Holiday::from_naive_date(NaiveDate::from_ymd_opt(year, month, day).unwrap(), name).unwrap()
    }

    fn to_string(holidays: &[Holiday]) -> String {
        holidays.iter().map(|h| h.to_string()).collect::<Vec<_>>().join(", ")
    }

    #[test]
    fn test_empty() {
        assert!(apply_substitute_holiday(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_no_sunday() {
        let holidays = vec![
            holiday(2013, 11, 23, LABOR_THANKSGIVING_DAY)
        ];
        assert_eq!(apply_substitute_holiday(&holidays).unwrap(), holidays);
    }

    #[test]
    fn test_single_sunday() {
        let holidays = vec![
            holiday(2013, 11, 3, CULTURE_DAY),
            holiday(2013, 11, 23, LABOR_THANKSGIVING_DAY)
        ];
        assert_eq!(
            to_string(&apply_substitute_holiday(&holidays).unwrap()),
            "2013-11-03:文化の日, 2013-11-04:振替休日, 2013-11-23:勤労感謝の日"
        );
    }

    #[test]
    fn test_run_after_sunday() {
        // May 3 2009 is a Sunday; the 4th and 5th are holidays already
        let holidays = vec![
            holiday(2009, 5, 3, CONSTITUTION_MEMORIAL_DAY),
            holiday(2009, 5, 4, GREENERY_DAY),
            holiday(2009, 5, 5, CHILDRENS_DAY)
        ];
        assert_eq!(
            to_string(&apply_substitute_holiday(&holidays).unwrap()),
            "2009-05-03:憲法記念日, 2009-05-04:みどりの日, 2009-05-05:こどもの日, 2009-05-06:振替休日"
        );
    }

    #[test]
    fn test_sunday_inside_run() {
        // May 4 2008 is a Sunday; the run only looks forward from it
        let holidays = vec![
            holiday(2008, 5, 3, CONSTITUTION_MEMORIAL_DAY),
            holiday(2008, 5, 4, GREENERY_DAY),
            holiday(2008, 5, 5, CHILDRENS_DAY)
        ];
        let result = apply_substitute_holiday(&holidays).unwrap();
        assert_eq!(
            to_string(&result),
            "2008-05-03:憲法記念日, 2008-05-04:みどりの日, 2008-05-05:こどもの日, 2008-05-06:振替休日"
        );
        assert_eq!(result.iter().filter(|h| h.is_substitute()).count(), 1);
    }

    #[test]
    fn test_gap_after_sunday() {
        // 2002-09-15 is a Sunday, the next holiday is a week later
        let holidays = vec![
            holiday(2002, 9, 15, RESPECT_FOR_THE_AGED_DAY),
            holiday(2002, 9, 23, AUTUMNAL_EQUINOX_DAY)
        ];
        assert_eq!(
            to_string(&apply_substitute_holiday(&holidays).unwrap()),
            "2002-09-15:敬老の日, 2002-09-16:振替休日, 2002-09-23:秋分の日"
        );
    }
}
