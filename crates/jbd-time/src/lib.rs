//! # jbd-time
//!
//! Japanese public holidays, business-day arithmetic, and a bounded
//! per-year holiday cache.
//!
//! ```
//! use jbd_time::{BusinessDayEngine, Calendar, CalendarDate, Configuration, HolidayEngine};
//!
//! let holidays = HolidayEngine::new().holidays_in_year(2024).unwrap();
//! assert_eq!(holidays.len(), 21);
//!
//! let engine = BusinessDayEngine::new(Configuration::new());
//! let mon: CalendarDate = "2024-01-15".parse().unwrap();
//! let fri: CalendarDate = "2024-01-19".parse().unwrap();
//! assert_eq!(engine.business_days_between(mon, fri).unwrap(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BusinessDayEngine`: the Japanese business-day calendar.
pub mod business_day;

/// `HolidayCache`: bounded memoization of yearly holiday lists.
pub mod cache;

/// `Calendar` trait and business-day conventions.
pub mod calendar;

/// Weekend and override configuration.
pub mod config;

/// `CalendarDate` type.
pub mod date;

/// Equinox day approximation.
pub mod equinox;

/// `Holiday` records.
pub mod holiday;

/// `chrono` adapters.
#[cfg(feature = "chrono")]
pub mod interop;

/// `HolidayEngine`: national holiday rules.
pub mod japan;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day::BusinessDayEngine;
pub use cache::{CacheStats, HolidayCache};
pub use calendar::{BusinessDayConvention, Calendar};
pub use config::{BusinessDayRules, Configuration};
pub use date::CalendarDate;
pub use equinox::Equinox;
pub use holiday::{Holiday, HolidayKind};
pub use japan::HolidayEngine;
pub use weekday::Weekday;
