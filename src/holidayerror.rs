use chrono::Month;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Hash)]
pub enum HolidayError {
    #[error("month must be in 1..=12 but {0} was given")]
    InvalidMonth(u32),
    #[error("{year}-{month:02}-{day:02} cannot be represented as a date")]
    DateOutOfRange { year: i32, month: u32, day: i32 },
}

impl HolidayError {
    pub fn date_out_of_range(year: i32, month: Month, day: i32) -> HolidayError {
        HolidayError::DateOutOfRange {
            year,
            month: month.number_from_month(),
            day,
        }
    }
}
