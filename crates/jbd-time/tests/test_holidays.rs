//! National holiday rules exercised through the public API.

use jbd_time::japan::SUBSTITUTE_HOLIDAY;
use jbd_time::{CalendarDate, Equinox, HolidayEngine, HolidayKind, Weekday};

fn date(y: i32, m: u8, d: u8) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

fn holiday_dates(year: i32) -> Vec<CalendarDate> {
    HolidayEngine::new()
        .holidays_in_year(year)
        .unwrap()
        .iter()
        .map(|h| h.date())
        .collect()
}

// ─── Full years ──────────────────────────────────────────────────────────────

#[test]
fn test_holidays_2025() {
    let expected = vec![
        date(2025, 1, 1),
        date(2025, 1, 13),
        date(2025, 2, 11),
        date(2025, 3, 20),
        date(2025, 4, 29),
        date(2025, 5, 3),
        date(2025, 5, 4),
        date(2025, 5, 5),
        date(2025, 7, 21),
        date(2025, 8, 11),
        date(2025, 9, 15),
        date(2025, 9, 23),
        date(2025, 10, 13),
        date(2025, 11, 3),
        date(2025, 11, 23),
        date(2025, 11, 24),
        date(2025, 12, 23),
    ];
    assert_eq!(holiday_dates(2025), expected);
}

#[test]
fn test_substitutes_do_not_cascade() {
    // 2025-05-04 is a Sunday holiday, so Monday qualifies as a substitute,
    // but Children's Day already holds it and nothing moves to Tuesday.
    let engine = HolidayEngine::new();
    assert_eq!(date(2025, 5, 4).weekday(), Weekday::Sunday);
    assert!(engine.is_holiday(date(2025, 5, 4)).unwrap());
    assert!(engine.is_substitute_holiday(date(2025, 5, 5)).unwrap());
    let monday = engine.holiday_on(date(2025, 5, 5)).unwrap().unwrap();
    assert_eq!(monday.name(), "Children's Day");
    assert_eq!(monday.kind(), HolidayKind::Fixed);
    assert!(!engine.is_holiday(date(2025, 5, 6)).unwrap());
    assert!(!engine.is_substitute_holiday(date(2025, 5, 6)).unwrap());
}

#[test]
fn test_every_year_has_the_base_holidays() {
    let engine = HolidayEngine::new();
    for year in 1990..=2060 {
        let holidays = engine.holidays_in_year(year).unwrap();
        let primary = holidays
            .iter()
            .filter(|h| h.kind() != HolidayKind::Substitute)
            .count();
        assert_eq!(primary, 16, "{year}");
        assert!(holidays.windows(2).all(|w| w[0].date() < w[1].date()), "{year}");
        for h in &holidays {
            assert_eq!(h.date().year(), year);
            assert!(engine.is_holiday(h.date()).unwrap(), "{h}");
        }
    }
}

#[test]
fn test_year_list_agrees_with_day_by_day_queries() {
    let engine = HolidayEngine::new();
    let listed = engine.holidays_in_year(2026).unwrap();
    let mut d = date(2026, 1, 1);
    let mut seen = Vec::new();
    while d.year() == 2026 {
        if let Some(h) = engine.holiday_on(d).unwrap() {
            seen.push(h);
        }
        d = d.succ().unwrap();
    }
    assert_eq!(seen, listed);
}

// ─── Rule details ────────────────────────────────────────────────────────────

#[test]
fn test_happy_mondays_2024() {
    let engine = HolidayEngine::new();
    for (d, name) in [
        (date(2024, 1, 8), "Coming of Age Day"),
        (date(2024, 7, 15), "Marine Day"),
        (date(2024, 9, 16), "Respect for the Aged Day"),
        (date(2024, 10, 14), "Sports Day"),
    ] {
        let h = engine.holiday_on(d).unwrap().unwrap();
        assert_eq!(h.name(), name);
        assert_eq!(h.kind(), HolidayKind::HappyMonday);
        assert_eq!(d.weekday(), Weekday::Monday);
    }
}

#[test]
fn test_substitute_holidays_2024() {
    let engine = HolidayEngine::new();
    let subs: Vec<_> = engine
        .holidays_in_year(2024)
        .unwrap()
        .into_iter()
        .filter(|h| h.kind() == HolidayKind::Substitute)
        .collect();
    let dates: Vec<_> = subs.iter().map(|h| h.date()).collect();
    assert_eq!(
        dates,
        [
            date(2024, 2, 12),
            date(2024, 5, 6),
            date(2024, 8, 12),
            date(2024, 9, 23),
            date(2024, 11, 4),
        ]
    );
    assert!(subs.iter().all(|h| h.name() == SUBSTITUTE_HOLIDAY));
    for d in dates {
        assert!(engine.is_substitute_holiday(d).unwrap());
        assert!(engine.is_holiday(d.pred().unwrap()).unwrap());
    }
}

#[test]
fn test_equinox_days() {
    let engine = HolidayEngine::new();
    assert_eq!(engine.vernal_equinox(2024).unwrap(), date(2024, 3, 20));
    assert_eq!(engine.autumnal_equinox(2024).unwrap(), date(2024, 9, 22));
    assert_eq!(Equinox::Vernal.date(2023).unwrap(), date(2023, 3, 21));
    assert_eq!(Equinox::Autumnal.month(), 9);
    let h = engine.holiday_on(date(2023, 3, 21)).unwrap().unwrap();
    assert_eq!(h.kind(), HolidayKind::Calculated);
    assert_eq!(h.name(), Equinox::Vernal.name());
}

#[test]
fn test_ordinary_days() {
    let engine = HolidayEngine::new();
    for d in [date(2024, 1, 2), date(2024, 6, 14), date(2024, 12, 25)] {
        assert!(!engine.is_holiday(d).unwrap(), "{d}");
        assert_eq!(engine.holiday_on(d).unwrap(), None);
    }
}

// ─── Ranges and errors ───────────────────────────────────────────────────────

#[test]
fn test_holidays_between_is_inclusive() {
    let engine = HolidayEngine::new();
    let golden_week = engine
        .holidays_between(date(2024, 4, 29), date(2024, 5, 6))
        .unwrap();
    let names: Vec<_> = golden_week.iter().map(|h| h.name()).collect();
    assert_eq!(
        names,
        [
            "Showa Day",
            "Constitution Memorial Day",
            "Greenery Day",
            "Children's Day",
            SUBSTITUTE_HOLIDAY,
        ]
    );
    assert!(engine
        .holidays_between(date(2024, 5, 6), date(2024, 4, 29))
        .unwrap()
        .is_empty());
}

#[test]
fn test_every_supported_year_has_a_holiday_list() {
    let engine = HolidayEngine::new();
    for year in 1000..=9999 {
        let holidays = engine.holidays_in_year(year).unwrap();
        assert!(holidays.len() >= 15, "{year}");
        assert!(
            holidays.windows(2).all(|w| w[0].date() < w[1].date()),
            "{year}"
        );
    }
}

#[test]
fn test_far_years_use_clamped_equinoxes() {
    let engine = HolidayEngine::new();
    assert_eq!(engine.vernal_equinox(9999).unwrap(), date(9999, 3, 1));
    assert!(engine.is_holiday(date(9999, 3, 1)).unwrap());
    assert!(engine.is_holiday(date(9999, 1, 1)).unwrap());
    assert_eq!(engine.autumnal_equinox(1001).unwrap(), date(1001, 9, 30));
}

#[test]
fn test_unsupported_years() {
    let engine = HolidayEngine::new();
    assert!(engine.holidays_in_year(0).unwrap_err().is_invalid_argument());
    assert!(engine.holidays_in_year(999).unwrap_err().is_invalid_argument());
    assert!(engine
        .vernal_equinox(10_000)
        .unwrap_err()
        .is_invalid_argument());
}
