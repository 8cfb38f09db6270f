//! Japanese national holidays (国民の祝日) for any year and month, following
//! the holiday law as amended over time, with substitute holidays (振替休日).
//!
//! ```
//! use chrono::Month;
//! use japaneseholidays::get_holidays;
//!
//! let holidays = get_holidays(2007, Month::April).unwrap();
//! let rendered: Vec<String> = holidays.iter().map(|h| h.to_string()).collect();
//! assert_eq!(rendered, ["2007-04-29:昭和の日", "2007-04-30:振替休日"]);
//! ```

pub mod holidayerror;

pub mod time {
    pub mod utility;
    pub mod effectiveyears;
    pub mod equinox;
    pub mod holiday;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod equinoxholiday;
        pub mod citizensholiday;
    }

    pub mod calendar {
        pub mod holidayrule;
        pub mod substituteholiday;
        pub mod holidaycalendar;
        pub mod japaneseholidaycalendar;
    }
}

pub use holidayerror::HolidayError;
pub use time::calendar::holidaycalendar::HolidayCalendar;
pub use time::calendar::japaneseholidaycalendar::{
    find_holiday_name,
    get_holidays,
    get_holidays_of_month_number,
    get_holidays_of_year,
    JapaneseHolidayCalendar
};
pub use time::holiday::Holiday;
pub use time::utility::JST;
