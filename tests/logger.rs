use daterange::config::LoggingConfig;
use daterange::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig { enabled: false }).unwrap();
    assert!(!logger.is_enabled());
    assert!(logger.file_path().is_none());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
}

#[test]
fn test_clones_share_entries() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_log_file_path_location() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("daterange/daterange.log"));
    }
}

#[test]
fn test_in_memory_history_is_capped() {
    use daterange::constants::MAX_LOG_ENTRIES;

    let logger = Logger::new();
    for i in 0..MAX_LOG_ENTRIES + 10 {
        logger.log(format!("entry {i}"));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_LOG_ENTRIES);
    assert!(logs[0].ends_with(&format!("entry {}", MAX_LOG_ENTRIES + 9)));
    assert!(logs[MAX_LOG_ENTRIES - 1].ends_with("entry 10"));
}
