//! JSON representation of configuration and results.
#![cfg(feature = "serde")]

use jbd_time::{CalendarDate, Configuration, HolidayCache, HolidayEngine, Weekday};

#[test]
fn test_configuration_from_json() {
    let json = r#"{
        "weekend": ["Friday", "Saturday"],
        "custom_holidays": ["2024-12-27"],
        "custom_business_days": ["2024-05-03"]
    }"#;
    let config: Configuration = serde_json::from_str(json).unwrap();
    assert!(config.weekend_days().contains(&Weekday::Friday));
    assert!(config
        .custom_holidays()
        .contains(&"2024-12-27".parse::<CalendarDate>().unwrap()));
    let back: Configuration =
        serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_missing_fields_take_defaults() {
    let config: Configuration = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Configuration::new());
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let all_week = r#"{"weekend": ["Sunday","Monday","Tuesday","Wednesday","Thursday","Friday","Saturday"]}"#;
    assert!(serde_json::from_str::<Configuration>(all_week).is_err());
    let bad_date = r#"{"custom_holidays": ["2024-02-30"]}"#;
    assert!(serde_json::from_str::<Configuration>(bad_date).is_err());
}

#[test]
fn test_holidays_and_stats_serialize() {
    let engine = HolidayEngine::new();
    let holidays = engine.holidays_in_year(2024).unwrap();
    let value = serde_json::to_value(&holidays[0]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"date": "2024-01-01", "name": "New Year's Day", "kind": "Fixed"})
    );

    let cache = HolidayCache::new();
    cache.get_or_compute(2024, &engine).unwrap();
    let stats = serde_json::to_value(cache.stats()).unwrap();
    assert_eq!(stats["size"], 1);
    assert_eq!(stats["most_accessed_year"], 2024);
}
