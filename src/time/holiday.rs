use std::fmt;

use chrono::{
    DateTime,
    Datelike,
    FixedOffset,
    NaiveDate,
    Weekday
};
use serde::{Deserialize, Serialize};

use crate::holidayerror::HolidayError;
use crate::time::utility::{jst_midnight, JST};

/// 元日 (New Year's Day)
pub const NEW_YEARS_DAY: &str = "元日";
/// 成人の日 (Coming of Age Day)
pub const COMING_OF_AGE_DAY: &str = "成人の日";
/// 建国記念の日 (National Foundation Day)
pub const NATIONAL_FOUNDATION_DAY: &str = "建国記念の日";
/// 春分の日 (Vernal Equinox Day)
pub const VERNAL_EQUINOX_DAY: &str = "春分の日";
/// 昭和の日 (Showa Day)
pub const SHOWA_DAY: &str = "昭和の日";
/// みどりの日 (Greenery Day)
pub const GREENERY_DAY: &str = "みどりの日";
/// 天皇誕生日 (Emperor's Birthday)
pub const EMPERORS_BIRTHDAY: &str = "天皇誕生日";
/// 憲法記念日 (Constitution Memorial Day)
pub const CONSTITUTION_MEMORIAL_DAY: &str = "憲法記念日";
/// 国民の休日 (Citizens' Holiday)
pub const CITIZENS_HOLIDAY: &str = "国民の休日";
/// こどもの日 (Children's Day)
pub const CHILDRENS_DAY: &str = "こどもの日";
/// 海の日 (Marine Day)
pub const MARINE_DAY: &str = "海の日";
/// 敬老の日 (Respect for the Aged Day)
pub const RESPECT_FOR_THE_AGED_DAY: &str = "敬老の日";
/// 秋分の日 (Autumnal Equinox Day)
pub const AUTUMNAL_EQUINOX_DAY: &str = "秋分の日";
/// 体育の日 (Health and Sports Day)
pub const HEALTH_AND_SPORTS_DAY: &str = "体育の日";
/// 文化の日 (Culture Day)
pub const CULTURE_DAY: &str = "文化の日";
/// 勤労感謝の日 (Labor Thanksgiving Day)
pub const LABOR_THANKSGIVING_DAY: &str = "勤労感謝の日";
/// 振替休日 (Substitute Holiday)
pub const SUBSTITUTE_HOLIDAY: &str = "振替休日";

/// A named national holiday. `date` is always midnight in JST.
///
/// Two holidays are equal when both the date and the name are equal.
/// `Display` renders `YYYY-MM-DD:<name>`.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "HolidayJsonProp")]
pub struct Holiday {
    date: DateTime<FixedOffset>,
    name: String
}

#[derive(Deserialize)]
struct HolidayJsonProp {
    date: DateTime<FixedOffset>,
    name: String
}

impl TryFrom<HolidayJsonProp> for Holiday {
    type Error = HolidayError;

    fn try_from(json_prop: HolidayJsonProp) -> Result<Holiday, HolidayError> {
        Holiday::new(json_prop.date, json_prop.name)
    }
}

impl Holiday {
    /// The date is moved into JST and truncated to midnight.
    pub fn new(date: DateTime<FixedOffset>, name: impl Into<String>) -> Result<Holiday, HolidayError> {
        Holiday::from_naive_date(date.with_timezone(&JST).date_naive(), name)
    }

    pub fn from_naive_date(date: NaiveDate, name: impl Into<String>) -> Result<Holiday, HolidayError> {
        Ok(Holiday {
            date: jst_midnight(date)?,
            name: name.into()
        })
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    /// Calendar date as seen in JST.
    pub fn naive_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_substitute(&self) -> bool {
        self.name == SUBSTITUTE_HOLIDAY
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.date.format("%Y-%m-%d"), self.name)
    }
}
