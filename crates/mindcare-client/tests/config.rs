use mindcare_client::config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, load_config, save_config,
};

#[test]
fn missing_file_yields_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ClientConfig {
        base_url: "https://api.mindcare.test".to_string(),
        timeout_secs: 10,
        ..ClientConfig::default()
    };
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"base_url":"https://old.example"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.base_url, "https://old.example");
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn newer_config_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version":99,"base_url":"x","timeout_secs":1}"#).unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn explicit_override_wins_and_is_normalized() {
    let config = ClientConfig::default().with_overrides(Some(" http://127.0.0.1:8080/ "));
    assert_eq!(config.base_url, "http://127.0.0.1:8080");
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &ClientConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
