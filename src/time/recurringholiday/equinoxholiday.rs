use chrono::NaiveDate;

use crate::holidayerror::HolidayError;
use crate::time::equinox::{equinox_day, is_within_validity, Equinox};
use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EquinoxHoliday {
    equinox: Equinox
}

impl EquinoxHoliday {
    pub const fn new(equinox: Equinox) -> EquinoxHoliday {
        EquinoxHoliday { equinox }
    }

    pub fn equinox(&self) -> Equinox {
        self.equinox
    }
}

impl RecurringHoliday for EquinoxHoliday {
    fn get_holiday(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        if !is_within_validity(year) {
            log::warn!(
                "{:?} equinox of {} lies outside the validity of the approximation; result is uncorrected",
                self.equinox,
                year
            );
        }
        self.equinox
            .date(year)
            .map(Some)
            .ok_or_else(|| HolidayError::date_out_of_range(
                year,
                self.equinox.month(),
                equinox_day(year, self.equinox)
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_holiday() {
        let spring = EquinoxHoliday::new(Equinox::Spring);
        let autumn = EquinoxHoliday::new(Equinox::Autumn);
        assert_eq!(spring.get_holiday(2013).unwrap(), NaiveDate::from_ymd_opt(2013, 3, 20));
        assert_eq!(autumn.get_holiday(2013).unwrap(), NaiveDate::from_ymd_opt(2013, 9, 23));
    }

    #[test]
    fn test_outside_validity_is_not_rejected() {
        let spring = EquinoxHoliday::new(Equinox::Spring);
        assert_eq!(
            spring.get_holiday(2151).unwrap(),
            NaiveDate::from_ymd_opt(2151, 3, equinox_day(2151, Equinox::Spring) as u32)
        );
    }
}
