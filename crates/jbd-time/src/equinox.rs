//! Approximate dates of the vernal and autumnal equinox days.
//!
//! Both holidays are proclaimed annually; this module uses the usual
//! piecewise-linear approximation
//!
//! ```text
//! day = floor(base + 0.2422 × (year − start) − floor((year − start) / 4))
//! ```
//!
//! whose constants depend on which of four year ranges `year` falls in.  The
//! formula is only trustworthy for 1851–2150; other years reuse the
//! 1980–2099 constants, and a day that drifts out of the month is clamped.

use crate::date::{days_in_month, CalendarDate, MAX_YEAR, MIN_YEAR};
use jbd_core::errors::Result;
use jbd_core::ensure;

/// Mean drift of the equinox, in days per year.
const DRIFT: f64 = 0.2422;

struct EquinoxRange {
    start: i32,
    end: i32,
    vernal_base: f64,
    autumnal_base: f64,
}

const RANGES: [EquinoxRange; 4] = [
    EquinoxRange {
        start: 1851,
        end: 1899,
        vernal_base: 19.8277,
        autumnal_base: 22.7020,
    },
    EquinoxRange {
        start: 1900,
        end: 1979,
        vernal_base: 21.124,
        autumnal_base: 23.73,
    },
    EquinoxRange {
        start: 1980,
        end: 2099,
        vernal_base: 20.8431,
        autumnal_base: 23.2488,
    },
    EquinoxRange {
        start: 2100,
        end: 2150,
        vernal_base: 21.851,
        autumnal_base: 24.2488,
    },
];

/// Range used outside 1851–2150.
const FALLBACK: usize = 2;

/// Vernal (March) or autumnal (September) equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equinox {
    /// Vernal Equinox Day, in March.
    Vernal,
    /// Autumnal Equinox Day, in September.
    Autumnal,
}

impl Equinox {
    /// Month the holiday falls in.
    pub fn month(&self) -> u8 {
        match self {
            Equinox::Vernal => 3,
            Equinox::Autumnal => 9,
        }
    }

    /// Holiday name.
    pub fn name(&self) -> &'static str {
        match self {
            Equinox::Vernal => "Vernal Equinox Day",
            Equinox::Autumnal => "Autumnal Equinox Day",
        }
    }

    /// Approximate day-of-month in `year` (may fall outside the month for
    /// years far from the valid range).
    fn approximate_day(&self, year: i32) -> i64 {
        let range = RANGES
            .iter()
            .find(|r| (r.start..=r.end).contains(&year))
            .unwrap_or(&RANGES[FALLBACK]);
        let base = match self {
            Equinox::Vernal => range.vernal_base,
            Equinox::Autumnal => range.autumnal_base,
        };
        let elapsed = (year - range.start) as f64;
        (base + DRIFT * elapsed - (elapsed / 4.0).floor()).floor() as i64
    }

    /// Date of this equinox day in `year`.
    ///
    /// Far from 1851–2150 the approximation drifts out of the month; the day
    /// is then clamped to the month's first or last day.
    ///
    /// # Errors
    /// [`InvalidArgument`](jbd_core::Error::InvalidArgument) if `year` is
    /// outside `[1000, 9999]`.
    pub fn date(&self, year: i32) -> Result<CalendarDate> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        let month = self.month();
        let day = self
            .approximate_day(year)
            .clamp(1, days_in_month(year, month).into());
        CalendarDate::from_ymd(year, month, day as u8)
    }
}

/// Vernal Equinox Day of `year`.
pub fn vernal_equinox(year: i32) -> Result<CalendarDate> {
    Equinox::Vernal.date(year)
}

/// Autumnal Equinox Day of `year`.
pub fn autumnal_equinox(year: i32) -> Result<CalendarDate> {
    Equinox::Autumnal.date(year)
}
