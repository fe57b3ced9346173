use datefield::config::LoggingConfig;
use datefield::constants::LOG_BUFFER_CAPACITY;
use datefield::logger::Logger;
use log::Log;

fn disabled_config(level: &str) -> LoggingConfig {
    LoggingConfig {
        enabled: false,
        level: level.to_string(),
    }
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs, vec!["second".to_string(), "first".to_string()]);

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_buffer_drops_oldest_when_full() {
    let logger = Logger::new();
    for i in 0..LOG_BUFFER_CAPACITY + 3 {
        logger.log(format!("entry {}", i));
    }
    let logs = logger.get_logs();
    assert_eq!(logs.len(), LOG_BUFFER_CAPACITY);
    assert_eq!(logs[0], format!("entry {}", LOG_BUFFER_CAPACITY + 2));
    assert_eq!(logs[LOG_BUFFER_CAPACITY - 1], "entry 3");
}

#[test]
fn test_dispatch_feeds_buffer() {
    let logger = Logger::new();
    let (_, sink) = logger.dispatch(&disabled_config("info")).unwrap().into_log();

    sink.log(
        &log::Record::builder()
            .args(format_args!("Date picker value changed"))
            .level(log::Level::Info)
            .target("datefield::picker::field")
            .build(),
    );

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("INFO"));
    assert!(logs[0].contains("datefield::picker::field"));
    assert!(logs[0].contains("Date picker value changed"));
}

#[test]
fn test_dispatch_respects_level() {
    let logger = Logger::new();
    let (_, sink) = logger.dispatch(&disabled_config("warn")).unwrap().into_log();

    sink.log(
        &log::Record::builder()
            .args(format_args!("Dialog opened"))
            .level(log::Level::Debug)
            .target("datefield")
            .build(),
    );
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_dispatch_rejects_unknown_level() {
    let logger = Logger::new();
    assert!(logger.dispatch(&disabled_config("chatty")).is_err());
}
