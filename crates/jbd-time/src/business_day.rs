//! Japanese business-day calendar.

use crate::calendar::Calendar;
use crate::config::{BusinessDayRules, Configuration};
use crate::date::CalendarDate;
use crate::japan::HolidayEngine;
use jbd_core::errors::Result;

/// Business days in Japan: not a weekend, not a national holiday, not a
/// custom holiday, unless declared a custom business day.
///
/// The arithmetic (`add_business_days`, `business_days_between`, …) comes
/// from the [`Calendar`] trait.
///
/// ```
/// use jbd_time::{BusinessDayEngine, Calendar, CalendarDate, Configuration};
///
/// let engine = BusinessDayEngine::new(Configuration::new());
/// let friday: CalendarDate = "2024-01-05".parse().unwrap();
/// // skips the weekend and Coming of Age Day (Monday, Jan 8)
/// assert_eq!(
///     engine.add_business_days(friday, 1).unwrap(),
///     "2024-01-09".parse::<CalendarDate>().unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BusinessDayEngine<R = Configuration> {
    holidays: HolidayEngine,
    rules: R,
}

impl<R: BusinessDayRules> BusinessDayEngine<R> {
    /// Create an engine over the given rules.
    ///
    /// `rules` may be a [`Configuration`] by value, by reference, or behind an
    /// `Arc`.
    pub fn new(rules: R) -> Self {
        Self {
            holidays: HolidayEngine::new(),
            rules,
        }
    }

    /// The rules this engine consults.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The national holiday engine.
    pub fn holiday_engine(&self) -> &HolidayEngine {
        &self.holidays
    }
}

impl Default for BusinessDayEngine {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl<R> Calendar for BusinessDayEngine<R>
where
    R: BusinessDayRules + std::fmt::Debug + Send + Sync,
{
    fn name(&self) -> &str {
        "Japan"
    }

    fn is_business_day(&self, date: CalendarDate) -> Result<bool> {
        // a custom business day wins over weekends and holidays alike
        if self.rules.is_custom_business_day(date) {
            return Ok(true);
        }
        if self.rules.is_weekend_weekday(date.weekday()) || self.rules.is_custom_holiday(date) {
            return Ok(false);
        }
        Ok(!self.holidays.is_holiday(date)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;
    use std::sync::Arc;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_weekends_and_holidays_are_closed() {
        let engine = BusinessDayEngine::new(Configuration::new());
        assert!(!engine.is_business_day(date(2024, 1, 6)).unwrap()); // Saturday
        assert!(!engine.is_business_day(date(2024, 1, 7)).unwrap()); // Sunday
        assert!(!engine.is_business_day(date(2024, 1, 8)).unwrap()); // Coming of Age Day
        assert!(!engine.is_business_day(date(2024, 9, 23)).unwrap()); // substitute
        assert!(engine.is_business_day(date(2024, 1, 9)).unwrap());
    }

    #[test]
    fn test_custom_business_day_beats_everything() {
        let holiday = date(2024, 1, 8);
        let saturday = date(2024, 1, 6);
        let config = Configuration::new()
            .with_custom_business_day(holiday)
            .with_custom_business_day(saturday)
            .with_custom_holiday(saturday);
        let engine = BusinessDayEngine::new(&config);
        assert!(engine.is_business_day(holiday).unwrap());
        assert!(engine.is_business_day(saturday).unwrap());
    }

    #[test]
    fn test_custom_holiday_closes_a_weekday() {
        let config = Arc::new(Configuration::new().with_custom_holiday(date(2024, 1, 10)));
        let engine = BusinessDayEngine::new(Arc::clone(&config));
        assert!(!engine.is_business_day(date(2024, 1, 10)).unwrap());
        assert_eq!(
            engine.next_business_day(date(2024, 1, 9)).unwrap(),
            date(2024, 1, 11)
        );
        assert_eq!(engine.rules().custom_holidays().len(), 1);
    }

    #[test]
    fn test_configurable_weekend() {
        let config = Configuration::new()
            .with_weekend([Weekday::Friday, Weekday::Saturday])
            .unwrap();
        let engine = BusinessDayEngine::new(config);
        assert!(engine.is_business_day(date(2024, 1, 7)).unwrap()); // Sunday
        assert!(!engine.is_business_day(date(2024, 1, 5)).unwrap()); // Friday
    }

    #[test]
    fn test_arithmetic_scenarios() {
        let engine = BusinessDayEngine::new(Configuration::new());
        // Mon -> Fri
        assert_eq!(
            engine
                .business_days_between(date(2024, 1, 15), date(2024, 1, 19))
                .unwrap(),
            4
        );
        // Friday + 1 skips the weekend and Coming of Age Day
        assert_eq!(
            engine.add_business_days(date(2024, 1, 5), 1).unwrap(),
            date(2024, 1, 9)
        );
        assert_eq!(
            engine.subtract_business_days(date(2024, 1, 9), 1).unwrap(),
            date(2024, 1, 5)
        );
        // Golden Week 2024: May 3-6 closed
        assert_eq!(
            engine.next_business_day(date(2024, 5, 2)).unwrap(),
            date(2024, 5, 7)
        );
        assert_eq!(
            engine.previous_business_day(date(2024, 5, 7)).unwrap(),
            date(2024, 5, 2)
        );
    }

    #[test]
    fn test_name_and_engine_accessors() {
        let engine: BusinessDayEngine = Default::default();
        assert_eq!(engine.name(), "Japan");
        assert!(engine.holiday_engine().is_holiday(date(2024, 1, 1)).unwrap());
    }
}
