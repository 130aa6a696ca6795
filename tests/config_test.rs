use mma_doc::config::*;
use tempfile::TempDir;

#[test]
fn test_default_config_uses_wolframscript() {
    let config = MmaDocConfig::default();
    assert_eq!(config.executable, "wolframscript");
    assert!(config.extra_args.is_empty());
}

#[test]
fn test_missing_file_yields_default() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, MmaDocConfig::default());
}

#[test]
fn test_save_and_load_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILENAME);
    let config = MmaDocConfig {
        executable: "/opt/Wolfram/wolframscript".to_string(),
        extra_args: vec!["-local".to_string()],
    };
    save_config(&path, &config).unwrap();
    assert!(!path.with_extension("tmp").exists());
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(&path, "extra_args = [\"-local\"]\n").unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config.executable, DEFAULT_EXECUTABLE);
    assert_eq!(config.extra_args, vec!["-local"]);
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(&path, "executable = [").unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().starts_with("config error: failed to parse config file"));
}

#[test]
fn test_default_config_path() {
    let path = default_config_path();
    assert!(path.ends_with("mma-doc/config.toml"));
}
