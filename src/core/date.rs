use crate::core::digits::is_non_negative_integer;
use crate::core::range::RangeRule;
use crate::domain::model::{DateComponents, Failure, Field, ValidatorKind};
use crate::domain::ports::Validator;
use chrono::NaiveDate;

pub const MONTHS: RangeRule = RangeRule::new(1, 12);
pub const YEARS: RangeRule = RangeRule::new(1, 9999);
pub const MIN_DAY: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Month,
    Day,
    Year,
}

/// Splits `MM/DD/YYYY` on the first two slashes.
///
/// Everything after the second slash, further slashes included, lands in the
/// year. `3/4/22/2` therefore yields the year `22/2` and fails the digit check
/// instead of quietly becoming `222`.
pub fn parse_date(input: &str) -> DateComponents {
    let mut parts = DateComponents::default();
    let mut field = DateField::Month;

    for c in input.chars() {
        field = match (field, c) {
            (DateField::Month, '/') => DateField::Day,
            (DateField::Day, '/') => DateField::Year,
            (DateField::Month, c) => {
                parts.month.push(c);
                DateField::Month
            }
            (DateField::Day, c) => {
                parts.day.push(c);
                DateField::Day
            }
            (DateField::Year, c) => {
                parts.year.push(c);
                DateField::Year
            }
        };
    }

    parts
}

pub fn is_leap_year(year: u64) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in `month` (1-based). Anything that is not a 31- or 30-day
/// month is treated as February.
pub fn days_in_month(month: u64, year: u64) -> u64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValidator {
    pub months: RangeRule,
    pub years: RangeRule,
}

impl Default for DateValidator {
    fn default() -> Self {
        Self {
            months: MONTHS,
            years: YEARS,
        }
    }
}

impl DateValidator {
    pub fn new(months: RangeRule, years: RangeRule) -> Self {
        Self { months, years }
    }

    pub fn check_components(&self, parts: &DateComponents) -> Result<(), Failure> {
        if !is_non_negative_integer(&parts.month) {
            return Err(Failure::empty_or_non_digit(Field::Month));
        }
        if !is_non_negative_integer(&parts.day) {
            return Err(Failure::empty_or_non_digit(Field::Day));
        }
        if !is_non_negative_integer(&parts.year) {
            return Err(Failure::empty_or_non_digit(Field::Year));
        }
        if !self.months.contains_digits(&parts.month) {
            return Err(Failure::out_of_range(Field::Month));
        }
        if !self.years.contains_digits(&parts.year) {
            return Err(Failure::out_of_range(Field::Year));
        }

        // 月與年已經過範圍檢查，解析不會失敗
        let (Ok(month), Ok(year)) = (parts.month.parse::<u64>(), parts.year.parse::<u64>()) else {
            return Err(Failure::out_of_range(Field::Month));
        };
        let days = RangeRule::new(MIN_DAY, days_in_month(month, year));
        if !days.contains_digits(&parts.day) {
            return Err(Failure::invalid_day_for_month());
        }

        Ok(())
    }

    /// Resolves a valid date to a calendar date.
    pub fn resolve(&self, input: &str) -> Result<NaiveDate, Failure> {
        let parts = parse_date(input);
        self.check_components(&parts)?;

        let month = parts.month.parse::<u32>().ok();
        let day = parts.day.parse::<u32>().ok();
        let year = parts.year.parse::<i32>().ok();
        match (year, month, day) {
            (Some(year), Some(month), Some(day)) => {
                NaiveDate::from_ymd_opt(year, month, day).ok_or_else(Failure::invalid_day_for_month)
            }
            _ => Err(Failure::out_of_range(Field::Year)),
        }
    }
}

impl Validator for DateValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Date
    }

    fn check(&self, input: &str) -> Result<(), Failure> {
        let parts = parse_date(input);
        tracing::trace!(
            "date parsed: month={:?} day={:?} year={:?}",
            parts.month,
            parts.day,
            parts.year
        );
        self.check_components(&parts)
    }

    fn normalize(&self, input: &str) -> Option<String> {
        self.resolve(input)
            .ok()
            .map(|date| date.format("%Y-%m-%d").to_string())
    }
}
