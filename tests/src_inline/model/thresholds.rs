use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_file(contents: &str) -> std::path::PathBuf {
    let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "archetype_config_{}_{}.json",
        std::process::id(),
        id
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_default_v1_is_valid() {
    let config = ClassifierConfig::default_v1();
    assert!(config.validate().is_ok());
    assert_eq!(config.balanced_min, 40);
    assert_eq!(config.balanced_max, 60);
    assert_eq!(ClassifierConfig::default(), config);
}

#[test]
fn test_confidence_bands_are_monotonic() {
    let config = ClassifierConfig::default_v1();
    assert_eq!(config.confidence_for(0), ConfidenceTier::High);
    assert_eq!(config.confidence_for(40), ConfidenceTier::High);
    assert_eq!(config.confidence_for(41), ConfidenceTier::Medium);
    assert_eq!(config.confidence_for(100), ConfidenceTier::Medium);
    assert_eq!(config.confidence_for(101), ConfidenceTier::Low);

    let mut prev = ConfidenceTier::High;
    for distance in 0..=400 {
        let tier = config.confidence_for(distance);
        assert!(tier <= prev, "tier rose at distance {distance}");
        prev = tier;
    }
}

#[test]
fn test_validate_rejects_inverted_bands() {
    let mut config = ClassifierConfig::default_v1();
    config.high_confidence_max_distance = 120;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ConfidenceBands {
            high: 120,
            medium: 100
        })
    ));
}

#[test]
fn test_validate_rejects_bad_balanced_window() {
    let mut config = ClassifierConfig::default_v1();
    config.balanced_min = 70;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BalancedWindow { min: 70, max: 60 })
    ));

    let mut config = ClassifierConfig::default_v1();
    config.balanced_max = 101;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_partial_config_fills_defaults() {
    let path = temp_file(r#"{ "high_confidence_max_distance": 20 }"#);
    let config = ClassifierConfig::load(&path).unwrap();
    assert_eq!(config.high_confidence_max_distance, 20);
    assert_eq!(config.medium_confidence_max_distance, 100);
    assert_eq!(config.balanced_min, 40);
}

#[test]
fn test_load_rejects_unknown_fields() {
    let path = temp_file(r#"{ "balanced_width": 20 }"#);
    assert!(matches!(
        ClassifierConfig::load(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_load_validates() {
    let path = temp_file(r#"{ "balanced_min": 80, "balanced_max": 20 }"#);
    assert!(matches!(
        ClassifierConfig::load(&path),
        Err(ConfigError::BalancedWindow { .. })
    ));
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("archetype_config_does_not_exist.json");
    assert!(matches!(
        ClassifierConfig::load(&path),
        Err(ConfigError::Io { .. })
    ));
}
