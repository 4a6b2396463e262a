use odin_binder::{Backend, BinderConfig, BinderError, Level, LogFormat, LoggerBinder};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[binder]
backend = "tracing"
level = "warn"
format = "json"
"#
    )
    .unwrap();

    let config = BinderConfig::from_file(file.path()).unwrap();
    assert_eq!(config.backend, Backend::Tracing);
    assert_eq!(config.level, Level::Warn);
    assert_eq!(config.format, LogFormat::Json);

    let binder = LoggerBinder::new(config).unwrap();
    assert_eq!(binder.info().level, Level::Warn);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BinderConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, BinderError::IoError(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_malformed_toml_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[binder\nlevel = ").unwrap();

    let err = BinderConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, BinderError::ConfigError { .. }));
}

#[test]
fn test_memory_backend_from_file_keeps_readable_records() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[binder]\nbackend = \"memory\"\nlevel = \"debug\"").unwrap();

    let binder = LoggerBinder::new(BinderConfig::from_file(file.path()).unwrap()).unwrap();
    let logger = odin_binder::ExternalLogger::logger(&binder, "jobs");
    logger.trace("too quiet");
    logger.debug("job queued");
    logger.error("job failed");

    let records = binder.memory_records().unwrap();
    let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["job queued", "job failed"]);
    assert_eq!(binder.info().backend, "memory");
}
