//! # jpbizday
//!
//! Japanese public holidays, business-day arithmetic, and a bounded holiday
//! cache.
//!
//! This crate is a **façade** over the workspace crates.  Application code
//! should depend on it rather than on `jbd-core` / `jbd-time` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! jpbizday = "0.1"
//! ```
//!
//! ```rust
//! use jpbizday::prelude::*;
//!
//! let engine = BusinessDayEngine::new(Configuration::new());
//! let thursday: CalendarDate = "2024-05-02".parse()?;
//! // Golden Week: May 3-6 are closed
//! assert_eq!(engine.next_business_day(thursday)?.to_string(), "2024-05-07");
//!
//! let cache = HolidayCache::new();
//! let holidays = cache.get_or_compute(2024, engine.holiday_engine())?;
//! assert_eq!(holidays.len(), 21);
//! # Ok::<(), jpbizday::core::Error>(())
//! ```
//!
//! ## Features
//!
//! * `serde`: (de)serialization of dates, weekdays, configuration, holidays,
//!   and cache statistics.
//! * `chrono`: conversions to and from `chrono::NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and validation macros.
pub use jbd_core as core;

/// Dates, holidays, calendars, and the holiday cache.
pub use jbd_time as time;

/// The types most programs need.
pub mod prelude {
    pub use jbd_core::{Error, Result};
    pub use jbd_time::{
        BusinessDayConvention, BusinessDayEngine, BusinessDayRules, CacheStats, Calendar,
        CalendarDate, Configuration, Holiday, HolidayCache, HolidayEngine, HolidayKind, Weekday,
    };
}
