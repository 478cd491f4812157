//! Config file loading tests

use std::io::Write;

use portfolio_core::{PageConfig, PortfolioError};
use tempfile::{tempdir, NamedTempFile};

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let file = write_config(r#"{ "preloader_delay_ms": 750, "scroll_threshold": 80.0 }"#);
    let config = PageConfig::load(file.path()).unwrap();

    assert_eq!(config.preloader_delay_ms, 750);
    assert_eq!(config.scroll_threshold, 80.0);
    assert_eq!(config.preloader_exit_ms, PageConfig::default().preloader_exit_ms);
    assert_eq!(config.stagger_step_ms, 100);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let file = write_config("{ preloader_delay_ms: ");
    let err = PageConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, PortfolioError::ConfigParse(_)));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let file = write_config(r#"{ "reveal_scale_from": 1.5 }"#);
    let err = PageConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, PortfolioError::InvalidConfig(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = PageConfig::load(dir.path().join("page.json")).unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = PageConfig::load_or_default(dir.path().join("page.json")).unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn test_roundtrip_through_file() {
    let config = PageConfig {
        preloader_delay_ms: 0,
        project_hover_lift_px: 12.0,
        ..PageConfig::default()
    };
    let file = write_config(&serde_json::to_string_pretty(&config).unwrap());
    assert_eq!(PageConfig::load(file.path()).unwrap(), config);
}
