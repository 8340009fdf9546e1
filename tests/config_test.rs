use std::fs;
use std::path::Path;

use rstest::rstest;

use prepkit::config::Settings;
use prepkit::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.easy_minutes, 15);
    assert_eq!(settings.medium_minutes, 25);
    assert_eq!(settings.hard_minutes, 35);
    assert!(settings.show_tips);
}

#[rstest]
fn test_load_without_config_file_yields_defaults() {
    let settings = Settings::load_from(None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[rstest]
fn test_missing_config_file_is_not_an_error() {
    let settings = Settings::load_from(Some(Path::new("/nonexistent/prepkit.toml"))).unwrap();
    assert_eq!(settings, Settings::default());
}

#[rstest]
fn test_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prepkit.toml");
    fs::write(
        &path,
        r#"
        medium_minutes = 40
        show_tips = false
        "#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();
    assert_eq!(settings.easy_minutes, 15);
    assert_eq!(settings.medium_minutes, 40);
    assert!(!settings.show_tips);
}

#[rstest]
fn test_zero_minutes_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prepkit.toml");
    fs::write(&path, "hard_minutes = 0\n").unwrap();

    let result = Settings::load_from(Some(&path));
    assert!(result.is_err());
}

#[rstest]
fn test_validate_flags_each_preset() {
    let mut settings = Settings::default();
    assert!(settings.validate().is_ok());
    settings.easy_minutes = 0;
    assert!(settings.validate().is_err());
}

#[rstest]
fn test_global_config_path_ends_with_crate_toml() {
    if let Some(path) = Settings::global_config_path() {
        assert!(path.ends_with("prepkit/prepkit.toml") || path.ends_with("prepkit.toml"));
    }
}
