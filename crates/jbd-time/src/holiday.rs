//! `Holiday` records produced by the holiday engine.

use std::fmt;

use crate::date::CalendarDate;

/// Which rule produced a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HolidayKind {
    /// Same month and day every year.
    Fixed,
    /// Vernal or autumnal equinox day.
    Calculated,
    /// The n-th Monday of a month.
    HappyMonday,
    /// The Monday after a holiday that fell on a Sunday.
    Substitute,
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HolidayKind::Fixed => "fixed",
            HolidayKind::Calculated => "calculated",
            HolidayKind::HappyMonday => "happy monday",
            HolidayKind::Substitute => "substitute",
        };
        write!(f, "{s}")
    }
}

/// A public holiday on a specific date.
///
/// Only [`HolidayEngine`](crate::japan::HolidayEngine) creates these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    date: CalendarDate,
    name: &'static str,
    kind: HolidayKind,
}

impl Holiday {
    pub(crate) fn new(date: CalendarDate, name: &'static str, kind: HolidayKind) -> Self {
        debug_assert!(!name.is_empty(), "holiday names are never empty");
        Self { date, name, kind }
    }

    /// The date the holiday is observed on.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// English name, e.g. `"Coming of Age Day"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rule that produced it.
    pub fn kind(&self) -> HolidayKind {
        self.kind
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.name, self.kind)
    }
}
