use timecalc::config::Config;
use timecalc::constants::DEFAULT_TIMESTAMP_FORMAT;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.display.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    assert_eq!(config.convert.default_epoch, "unix");
    assert!(config.convert.default_timezone.is_none());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid timestamp format should fail
    config.display.timestamp_format = "%Q".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid epoch system
    config.display.timestamp_format = DEFAULT_TIMESTAMP_FORMAT.to_string();
    config.convert.default_epoch = "vms".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid timezone
    config.convert.default_epoch = "windows".to_string();
    config.convert.default_timezone = Some("Nowhere/Flats".to_string());
    assert!(config.validate().is_err());

    // Reset and test invalid logging level
    config.convert.default_timezone = Some("Europe/Paris".to_string());
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_epoch = \"unix\""));
    assert!(toml_str.contains("timestamp_format = \"%Y-%m-%d %H:%M:%S%.6f\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[convert]
default_epoch = "windows"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.convert.default_epoch, "windows");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.display.timestamp_format, DEFAULT_TIMESTAMP_FORMAT); // default value
    assert!(config.convert.default_timezone.is_none()); // default value
    assert_eq!(config.logging.level, "info"); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.display.timestamp_format, default_config.display.timestamp_format);
    assert_eq!(config.convert.default_epoch, default_config.convert.default_epoch);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("timecalc_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Timecalc Configuration File"));
    assert!(content.contains("default_epoch = \"unix\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
