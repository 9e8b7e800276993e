use std::fs;

use serial_test::serial;
use tempfile::TempDir;
use trivia_browse::config::API_URL_ENV;
use trivia_browse::{BrowseError, Config};

// SAFETY (for the env calls below): tests touching the environment are
// serialized, so no other thread reads it concurrently.

#[test]
#[serial]
fn test_missing_file_gives_defaults() {
    unsafe { std::env::remove_var(API_URL_ENV) };
    let dir = TempDir::new().unwrap();

    let config = Config::load_from(&dir.path().join("absent.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_load_from_yaml_file() {
    unsafe { std::env::remove_var(API_URL_ENV) };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trivia-browse.yaml");
    fs::write(
        &path,
        "base_url: http://trivia.local:8080/api\ncollection: questions\ntimeout_secs: 5\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.base_url, "http://trivia.local:8080/api");
    assert_eq!(config.collection, "questions");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, 10);
}

#[test]
#[serial]
fn test_env_overrides_base_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trivia-browse.yaml");
    fs::write(&path, "base_url: http://from-file/api\n").unwrap();

    unsafe { std::env::set_var(API_URL_ENV, "http://from-env:9000/api") };
    let config = Config::load_from(&path);
    unsafe { std::env::remove_var(API_URL_ENV) };

    assert_eq!(config.unwrap().base_url, "http://from-env:9000/api");
}

#[test]
#[serial]
fn test_invalid_yaml_is_an_error() {
    unsafe { std::env::remove_var(API_URL_ENV) };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trivia-browse.yaml");
    fs::write(&path, "timeout_secs: [not, a, number]\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(BrowseError::YamlParse(_))
    ));
}

#[test]
#[serial]
fn test_invalid_base_url_in_file_is_rejected() {
    unsafe { std::env::remove_var(API_URL_ENV) };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trivia-browse.yaml");
    fs::write(&path, "base_url: mailto:someone@example.com\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(BrowseError::Config(_))
    ));
}
