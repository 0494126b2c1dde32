//! Day-of-week enum.

use jbd_core::ensure;
use jbd_core::errors::Result;

/// Day of the week.
///
/// Variants are numbered 0–6 starting from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All seven days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the 0-based number (0 = Sunday … 6 = Saturday).
    pub fn from_number_from_sunday(n: u8) -> Result<Self> {
        ensure!(n <= 6, "weekday number {n} out of range [0, 6]");
        Ok(Self::ALL[n as usize])
    }

    /// Return the 0-based number (0 = Sunday … 6 = Saturday).
    pub fn number_from_sunday(&self) -> u8 {
        *self as u8
    }

    /// Weekday of the given count of days since 1970-01-01 (a Thursday).
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        Self::ALL[(days + 4).rem_euclid(7) as usize]
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}
