//! Business-day overrides.
//!
//! [`BusinessDayRules`] is the query interface the business-day engine
//! consumes; [`Configuration`] is the standard implementation, holding the
//! weekend-day set and two override sets.  A configuration is an ordinary
//! value handed to [`BusinessDayEngine::new`](crate::BusinessDayEngine::new);
//! there is no process-wide instance.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::date::CalendarDate;
use crate::weekday::Weekday;
use jbd_core::ensure;
use jbd_core::errors::Result;

/// Queries a business-day calendar needs from its configuration.
///
/// Implementations must be pure: the same arguments always give the same
/// answer.
pub trait BusinessDayRules {
    /// Return `true` if `weekday` is a non-working day of the week.
    fn is_weekend_weekday(&self, weekday: Weekday) -> bool;

    /// Return `true` if `date` was declared an extra non-business day.
    fn is_custom_holiday(&self, date: CalendarDate) -> bool;

    /// Return `true` if `date` was declared a business day regardless of
    /// weekends and holidays.
    fn is_custom_business_day(&self, date: CalendarDate) -> bool;
}

impl<T: BusinessDayRules + ?Sized> BusinessDayRules for &T {
    fn is_weekend_weekday(&self, weekday: Weekday) -> bool {
        (**self).is_weekend_weekday(weekday)
    }

    fn is_custom_holiday(&self, date: CalendarDate) -> bool {
        (**self).is_custom_holiday(date)
    }

    fn is_custom_business_day(&self, date: CalendarDate) -> bool {
        (**self).is_custom_business_day(date)
    }
}

impl<T: BusinessDayRules + ?Sized> BusinessDayRules for Arc<T> {
    fn is_weekend_weekday(&self, weekday: Weekday) -> bool {
        (**self).is_weekend_weekday(weekday)
    }

    fn is_custom_holiday(&self, date: CalendarDate) -> bool {
        (**self).is_custom_holiday(date)
    }

    fn is_custom_business_day(&self, date: CalendarDate) -> bool {
        (**self).is_custom_business_day(date)
    }
}

/// Weekend days plus custom holiday and business-day overrides.
///
/// The default weekend is Saturday and Sunday, with no overrides.
///
/// ```
/// use jbd_time::{CalendarDate, Configuration, Weekday};
///
/// let office_party: CalendarDate = "2024-12-27".parse().unwrap();
/// let config = Configuration::new()
///     .with_weekend([Weekday::Friday, Weekday::Saturday])
///     .unwrap()
///     .with_custom_holiday(office_party);
/// assert!(config.weekend_days().contains(&Weekday::Friday));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfiguration"))]
pub struct Configuration {
    weekend: BTreeSet<Weekday>,
    custom_holidays: BTreeSet<CalendarDate>,
    custom_business_days: BTreeSet<CalendarDate>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            weekend: BTreeSet::from([Weekday::Saturday, Weekday::Sunday]),
            custom_holidays: BTreeSet::new(),
            custom_business_days: BTreeSet::new(),
        }
    }
}

impl Configuration {
    /// Saturday/Sunday weekend, no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Builder-style setters ────────────────────────────────────────────────

    /// Replace the weekend-day set.
    ///
    /// # Errors
    /// Rejects a weekend covering all seven days: skip searches would then
    /// have nothing to stop on.
    pub fn with_weekend(mut self, days: impl IntoIterator<Item = Weekday>) -> Result<Self> {
        self.set_weekend(days)?;
        Ok(self)
    }

    /// Replace the weekend-day set from 0-based day numbers
    /// (0 = Sunday … 6 = Saturday).
    pub fn with_weekend_numbers(self, numbers: &[u8]) -> Result<Self> {
        let days = numbers
            .iter()
            .map(|&n| Weekday::from_number_from_sunday(n))
            .collect::<Result<Vec<_>>>()?;
        self.with_weekend(days)
    }

    /// Add a custom non-business day.
    pub fn with_custom_holiday(mut self, date: CalendarDate) -> Self {
        self.add_custom_holiday(date);
        self
    }

    /// Add a custom business day.
    pub fn with_custom_business_day(mut self, date: CalendarDate) -> Self {
        self.add_custom_business_day(date);
        self
    }

    // ── Mutators ─────────────────────────────────────────────────────────────

    /// Replace the weekend-day set in place.
    pub fn set_weekend(&mut self, days: impl IntoIterator<Item = Weekday>) -> Result<()> {
        let weekend: BTreeSet<Weekday> = days.into_iter().collect();
        ensure!(
            weekend.len() < Weekday::ALL.len(),
            "weekend cannot cover every day of the week"
        );
        self.weekend = weekend;
        Ok(())
    }

    /// Declare `date` a non-business day.  Returns `false` if it already was.
    pub fn add_custom_holiday(&mut self, date: CalendarDate) -> bool {
        self.custom_holidays.insert(date)
    }

    /// Remove a custom non-business day.  Returns `true` if it was present.
    pub fn remove_custom_holiday(&mut self, date: CalendarDate) -> bool {
        self.custom_holidays.remove(&date)
    }

    /// Declare `date` a business day.  Returns `false` if it already was.
    pub fn add_custom_business_day(&mut self, date: CalendarDate) -> bool {
        self.custom_business_days.insert(date)
    }

    /// Remove a custom business day.  Returns `true` if it was present.
    pub fn remove_custom_business_day(&mut self, date: CalendarDate) -> bool {
        self.custom_business_days.remove(&date)
    }

    /// Drop both override sets, keeping the weekend.
    pub fn clear_overrides(&mut self) {
        self.custom_holidays.clear();
        self.custom_business_days.clear();
    }

    // ── Inspectors ───────────────────────────────────────────────────────────

    /// The weekend days, Sunday first.
    pub fn weekend_days(&self) -> &BTreeSet<Weekday> {
        &self.weekend
    }

    /// Custom non-business days in date order.
    pub fn custom_holidays(&self) -> &BTreeSet<CalendarDate> {
        &self.custom_holidays
    }

    /// Custom business days in date order.
    pub fn custom_business_days(&self) -> &BTreeSet<CalendarDate> {
        &self.custom_business_days
    }
}

impl BusinessDayRules for Configuration {
    fn is_weekend_weekday(&self, weekday: Weekday) -> bool {
        self.weekend.contains(&weekday)
    }

    fn is_custom_holiday(&self, date: CalendarDate) -> bool {
        self.custom_holidays.contains(&date)
    }

    fn is_custom_business_day(&self, date: CalendarDate) -> bool {
        self.custom_business_days.contains(&date)
    }
}

/// Unchecked mirror of [`Configuration`] used to validate deserialized input.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawConfiguration {
    weekend: BTreeSet<Weekday>,
    custom_holidays: BTreeSet<CalendarDate>,
    custom_business_days: BTreeSet<CalendarDate>,
}

#[cfg(feature = "serde")]
impl Default for RawConfiguration {
    fn default() -> Self {
        let Configuration {
            weekend,
            custom_holidays,
            custom_business_days,
        } = Configuration::default();
        Self {
            weekend,
            custom_holidays,
            custom_business_days,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfiguration> for Configuration {
    type Error = jbd_core::Error;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        Ok(Configuration {
            custom_holidays: raw.custom_holidays,
            custom_business_days: raw.custom_business_days,
            ..Configuration::default()
        }
        .with_weekend(raw.weekend)?)
    }
}
