use chrono::{Month, NaiveDate, Weekday};

use crate::holidayerror::HolidayError;
use crate::time::effectiveyears::EffectiveYears;
use crate::time::equinox::Equinox;
use crate::time::holiday::*;
use crate::time::recurringholiday::citizensholiday::CitizensHoliday;
use crate::time::recurringholiday::equinoxholiday::EquinoxHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::{
    RecurringHoliday,
    RecurringHolidayVariant
};

/// One row of the national holiday law: a named recurring holiday that is in
/// force for a window of years.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HolidayRule {
    name: &'static str,
    holiday: RecurringHolidayVariant,
    effective_years: EffectiveYears
}

impl HolidayRule {
    const fn new(name: &'static str, holiday: RecurringHolidayVariant, effective_years: EffectiveYears) -> HolidayRule {
        HolidayRule { name, holiday, effective_years }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn holiday(&self) -> &RecurringHolidayVariant {
        &self.holiday
    }

    pub fn effective_years(&self) -> EffectiveYears {
        self.effective_years
    }

    /// The rule's date in `year`, or `None` when the rule is not in force or
    /// its conditions are not met.
    pub fn apply(&self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        if !self.effective_years.contain(year) {
            return Ok(None);
        }
        self.holiday.get_holiday(year)
    }
}

const fn fixed(month: Month, day: u32) -> RecurringHolidayVariant {
    RecurringHolidayVariant::FixedDate(FixedDateHoliday::new(month, day))
}

const fn nth_monday(month: Month, n: u8) -> RecurringHolidayVariant {
    match NthWeekdayHoliday::new(month, n, Weekday::Mon) {
        Some(holiday) => RecurringHolidayVariant::NthWeekday(holiday),
        None => panic!("n must be in 1..=5"),
    }
}

const fn equinox(equinox: Equinox) -> RecurringHolidayVariant {
    RecurringHolidayVariant::Equinox(EquinoxHoliday::new(equinox))
}

const fn citizens(citizens: CitizensHoliday) -> RecurringHolidayVariant {
    RecurringHolidayVariant::Citizens(citizens)
}

const JANUARY: &[HolidayRule] = &[
    HolidayRule::new(NEW_YEARS_DAY, fixed(Month::January, 1), EffectiveYears::since(1949)),
    HolidayRule::new(COMING_OF_AGE_DAY, nth_monday(Month::January, 2), EffectiveYears::since(2000)),
    HolidayRule::new(COMING_OF_AGE_DAY, fixed(Month::January, 15), EffectiveYears::between(1949, 1999)),
];

const FEBRUARY: &[HolidayRule] = &[
    HolidayRule::new(NATIONAL_FOUNDATION_DAY, fixed(Month::February, 11), EffectiveYears::since(1967)),
];

const MARCH: &[HolidayRule] = &[
    HolidayRule::new(VERNAL_EQUINOX_DAY, equinox(Equinox::Spring), EffectiveYears::since(1949)),
];

const APRIL: &[HolidayRule] = &[
    HolidayRule::new(SHOWA_DAY, fixed(Month::April, 29), EffectiveYears::since(2007)),
    HolidayRule::new(GREENERY_DAY, fixed(Month::April, 29), EffectiveYears::between(1989, 2006)),
    HolidayRule::new(EMPERORS_BIRTHDAY, fixed(Month::April, 29), EffectiveYears::between(1949, 1988)),
];

const MAY: &[HolidayRule] = &[
    HolidayRule::new(CONSTITUTION_MEMORIAL_DAY, fixed(Month::May, 3), EffectiveYears::since(1949)),
    HolidayRule::new(GREENERY_DAY, fixed(Month::May, 4), EffectiveYears::since(2007)),
    HolidayRule::new(CITIZENS_HOLIDAY, citizens(CitizensHoliday::GoldenWeek), EffectiveYears::between(1988, 2006)),
    HolidayRule::new(CHILDRENS_DAY, fixed(Month::May, 5), EffectiveYears::since(1949)),
];

const JULY: &[HolidayRule] = &[
    HolidayRule::new(MARINE_DAY, nth_monday(Month::July, 3), EffectiveYears::since(2003)),
    HolidayRule::new(MARINE_DAY, fixed(Month::July, 20), EffectiveYears::between(1996, 2002)),
];

const SEPTEMBER: &[HolidayRule] = &[
    HolidayRule::new(RESPECT_FOR_THE_AGED_DAY, nth_monday(Month::September, 3), EffectiveYears::since(2003)),
    HolidayRule::new(RESPECT_FOR_THE_AGED_DAY, fixed(Month::September, 15), EffectiveYears::between(1996, 2002)),
    HolidayRule::new(CITIZENS_HOLIDAY, citizens(CitizensHoliday::SilverWeek), EffectiveYears::since(2003)),
    HolidayRule::new(AUTUMNAL_EQUINOX_DAY, equinox(Equinox::Autumn), EffectiveYears::since(1949)),
];

const OCTOBER: &[HolidayRule] = &[
    HolidayRule::new(HEALTH_AND_SPORTS_DAY, nth_monday(Month::October, 2), EffectiveYears::since(2000)),
    HolidayRule::new(HEALTH_AND_SPORTS_DAY, fixed(Month::October, 10), EffectiveYears::between(1949, 1999)),
];

const NOVEMBER: &[HolidayRule] = &[
    HolidayRule::new(CULTURE_DAY, fixed(Month::November, 3), EffectiveYears::since(1948)),
    HolidayRule::new(LABOR_THANKSGIVING_DAY, fixed(Month::November, 23), EffectiveYears::since(1948)),
];

const DECEMBER: &[HolidayRule] = &[
    HolidayRule::new(EMPERORS_BIRTHDAY, fixed(Month::December, 23), EffectiveYears::since(1989)),
];

/// Rules of `month` in calendar order. Rules sharing a date are mutually
/// exclusive by year, so the active ones always come out date-ascending.
pub fn holiday_rules(month: Month) -> &'static [HolidayRule] {
    match month {
        Month::January => JANUARY,
        Month::February => FEBRUARY,
        Month::March => MARCH,
        Month::April => APRIL,
        Month::May => MAY,
        Month::June => &[],
        Month::July => JULY,
        Month::August => &[],
        Month::September => SEPTEMBER,
        Month::October => OCTOBER,
        Month::November => NOVEMBER,
        Month::December => DECEMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::time::utility::MONTHS;

    #[test]
    fn test_rules_belong_to_their_month() {
        for month in MONTHS {
            for rule in holiday_rules(month) {
                let month_of_rule = match rule.holiday() {
                    RecurringHolidayVariant::FixedDate(h) => h.month(),
                    RecurringHolidayVariant::NthWeekday(h) => h.month(),
                    RecurringHolidayVariant::Equinox(h) => h.equinox().month(),
                    RecurringHolidayVariant::Citizens(CitizensHoliday::GoldenWeek) => Month::May,
                    RecurringHolidayVariant::Citizens(CitizensHoliday::SilverWeek) => Month::September
                };
                assert_eq!(month_of_rule, month, "{}", rule.name());
            }
        }
    }

    #[rstest]
    #[case(Month::June)]
    #[case(Month::August)]
    fn test_months_without_rules(#[case] month: Month) {
        assert!(holiday_rules(month).is_empty());
    }

    #[rstest]
    #[case(1948, None)]
    #[case(1949, NaiveDate::from_ymd_opt(1949, 1, 1))]
    fn test_apply_threshold(#[case] year: i32, #[case] expected: Option<NaiveDate>) {
        assert_eq!(holiday_rules(Month::January)[0].apply(year).unwrap(), expected);
    }

    #[rstest]
    #[case(1998, None)]
    #[case(2002, None)]
    #[case(2009, NaiveDate::from_ymd_opt(2009, 9, 22))]
    fn test_apply_silver_week_gate(#[case] year: i32, #[case] expected: Option<NaiveDate>) {
        let rule = holiday_rules(Month::September)
            .iter()
            .find(|r| r.name() == CITIZENS_HOLIDAY)
            .unwrap();
        assert_eq!(rule.apply(year).unwrap(), expected);
    }

    #[test]
    fn test_apply_does_not_evaluate_inactive_rule() {
        // inactive rules must not fail even where the date is unrepresentable
        let rule = &holiday_rules(Month::April)[0];
        assert_eq!(rule.apply(i32::MIN).unwrap(), None);
    }
}
