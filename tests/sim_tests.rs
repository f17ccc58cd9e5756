//! Headless driver tests

use std::collections::HashMap;

use log::LevelFilter;

use stacker::sim::{self, SimSettings};

fn settings_from(vars: &[(&str, &str)]) -> anyhow::Result<SimSettings> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SimSettings::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_settings_defaults() {
    let settings = settings_from(&[]).unwrap();
    assert_eq!(settings.seed, 1);
    assert_eq!(settings.ticks, 3600);
    assert_eq!(settings.log_level, LevelFilter::Info);
}

#[test]
fn test_settings_from_vars() {
    let settings = settings_from(&[
        ("STACKER_SEED", "99"),
        ("STACKER_TICKS", " 500 "),
        ("STACKER_LOG", "debug"),
        ("STACKER_CONFIG", ""),
    ])
    .unwrap();
    assert_eq!(settings.seed, 99);
    assert_eq!(settings.ticks, 500);
    assert_eq!(settings.log_level, LevelFilter::Debug);
}

#[test]
fn test_unparsable_numbers_fall_back() {
    let settings = settings_from(&[("STACKER_SEED", "abc"), ("STACKER_TICKS", "-4")]).unwrap();
    assert_eq!(settings.seed, 1);
    assert_eq!(settings.ticks, 3600);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = settings_from(&[("STACKER_CONFIG", "/nonexistent/stacker.json")]).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/stacker.json"));
}

#[test]
fn test_scripted_session_is_reproducible() {
    let settings = SimSettings {
        ticks: 2000,
        seed: 31,
        ..SimSettings::default()
    };

    let first = sim::run(&settings).unwrap();
    let second = sim::run(&settings).unwrap();
    assert_eq!(first, second);
    assert!(first.pieces_locked > 10);
    assert!(first.ticks <= 2000);
}
