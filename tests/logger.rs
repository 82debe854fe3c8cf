use std::fs;
use tasklist::config::LoggingConfig;
use tasklist::logger::Logger;

#[test]
fn test_in_memory_logs_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());
    assert!(logger.file_path().is_none());

    logger.log("Test message".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_config_based_logging_enabled() {
    let log_path = std::env::temp_dir().join("tasklist_test_logs").join("tasklist.log");
    let _ = fs::remove_file(&log_path);

    let config = LoggingConfig {
        enabled: true,
        level: "info".to_string(),
        file: Some(log_path.clone()),
    };
    let logger = Logger::from_config(&config).unwrap();
    assert!(logger.is_enabled());
    assert_eq!(logger.file_path(), Some(log_path.as_path()));

    logger.log("Test message with file".to_string());
    assert!(logger.get_logs()[0].contains("Test message with file"));

    let file_content = fs::read_to_string(&log_path).unwrap();
    assert!(file_content.contains("Test message with file"));

    let _ = fs::remove_file(&log_path);
}

#[test]
fn test_in_memory_logs_are_capped() {
    use tasklist::constants::MAX_LOG_ENTRIES;

    let logger = Logger::new();
    for i in 0..MAX_LOG_ENTRIES + 25 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_LOG_ENTRIES);
    assert!(logs[0].ends_with(&format!("entry {}", MAX_LOG_ENTRIES + 24)));
    assert!(logs[MAX_LOG_ENTRIES - 1].ends_with("entry 25"));
}
