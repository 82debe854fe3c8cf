use tasklist::config::Config;
use tasklist::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.heading, "Minhas tasks");
    assert_eq!(config.ui.placeholder, "Adicionar novo todo");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());

    config.ui.heading = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[ui]
icon_theme = "Unicode"
mouse_enabled = false

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert!(!config.ui.mouse_enabled);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.ui.heading, "Minhas tasks");
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.heading, default_config.ui.heading);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_level_filter() {
    let mut config = Config::default();
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Info);

    config.logging.level = "nope".to_string();
    assert!(config.logging.level_filter().is_err());
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("tasklist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }

    Config::generate_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# tasklist Configuration File"));
    assert!(content.contains("heading = \"Minhas tasks\""));

    // The generated file loads back
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.placeholder, "Adicionar novo todo");

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_file_rejects_invalid_level() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("tasklist_test_invalid_config");
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}
