// The logger binder handed to the logging facade. A binder is a plain value
// that can be built and passed around; the facade lookup path also gets one
// process-wide instance, initialised at most once and never replaced.

use crate::adapters::{MemoryLoggerFactory, TracingLoggerFactory};
use crate::config::{Backend, BinderConfig, LogFormat};
use crate::domain::model::{BinderInfo, LogRecord};
use crate::domain::ports::{ExternalLogger, LoggerFactory};
use crate::utils::error::{BinderError, Result};
use crate::utils::validation::Validate;
use crate::version::{check_compatibility, API_COMPATIBILITY_LIST};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Facade API version this binder was built against.
pub const REQUESTED_API_VERSION: &str = "1.7";

static INSTANCE: OnceLock<LoggerBinder> = OnceLock::new();

pub struct LoggerBinder {
    config: BinderConfig,
    factory: Arc<dyn LoggerFactory>,
}

impl LoggerBinder {
    pub fn new(config: BinderConfig) -> Result<Self> {
        config.validate()?;

        let factory: Arc<dyn LoggerFactory> = match config.backend {
            Backend::Tracing => Arc::new(TracingLoggerFactory::new(config.level)),
            Backend::Memory => Arc::new(MemoryLoggerFactory::new(config.level)),
        };

        tracing::debug!(
            backend = %config.backend,
            level = %config.level,
            "logger binder created"
        );
        Ok(Self { config, factory })
    }

    /// Wraps an injected factory. Backend and level are taken from the
    /// factory; only the output format comes from `config`.
    pub fn with_factory(factory: Arc<dyn LoggerFactory>, config: BinderConfig) -> Self {
        let backend = factory.backend();
        let format = match backend {
            Backend::Memory => LogFormat::Compact,
            Backend::Tracing => config.format,
        };
        let config = BinderConfig {
            backend,
            level: factory.min_level(),
            format,
        };
        Self { config, factory }
    }

    /// The process-wide binder. Falls back to the default tracing binder
    /// unless [`LoggerBinder::install`] ran first.
    pub fn singleton() -> &'static LoggerBinder {
        INSTANCE.get_or_init(LoggerBinder::default)
    }

    /// Makes `binder` the process-wide instance.
    pub fn install(binder: LoggerBinder) -> Result<&'static LoggerBinder> {
        INSTANCE
            .set(binder)
            .map_err(|_| BinderError::AlreadyInstalled)?;
        tracing::debug!("logger binder installed");
        Ok(Self::singleton())
    }

    pub fn requested_api_version(&self) -> &'static str {
        REQUESTED_API_VERSION
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Records captured by a memory-backed binder; `None` for other backends.
    pub fn memory_records(&self) -> Option<Vec<LogRecord>> {
        self.factory.captured_records()
    }

    pub fn check_facade_compatibility(&self) -> Result<()> {
        check_compatibility(REQUESTED_API_VERSION, API_COMPATIBILITY_LIST)
    }

    pub fn info(&self) -> BinderInfo {
        BinderInfo {
            requested_api_version: REQUESTED_API_VERSION.to_string(),
            factory_name: self.logger_factory_name().to_string(),
            backend: self.factory.backend().to_string(),
            level: self.factory.min_level(),
        }
    }
}

impl Default for LoggerBinder {
    fn default() -> Self {
        let config = BinderConfig::default();
        let factory = Arc::new(TracingLoggerFactory::new(config.level));
        Self { config, factory }
    }
}

impl ExternalLogger for LoggerBinder {
    fn logger_factory(&self) -> &dyn LoggerFactory {
        self.factory.as_ref()
    }
}

impl fmt::Debug for LoggerBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBinder")
            .field("config", &self.config)
            .field("factory", &self.factory.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Level;

    #[test]
    fn test_singleton_is_identical_across_calls() {
        let a = LoggerBinder::singleton();
        let b = LoggerBinder::singleton();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_requested_api_version() {
        assert_eq!(REQUESTED_API_VERSION, "1.7");
        assert_eq!(LoggerBinder::singleton().requested_api_version(), "1.7");
        assert_eq!(LoggerBinder::default().requested_api_version(), "1.7");
    }

    #[test]
    fn test_own_version_is_facade_compatible() {
        assert!(LoggerBinder::default().check_facade_compatibility().is_ok());
    }

    #[test]
    fn test_new_selects_backend() {
        let binder = LoggerBinder::new(BinderConfig {
            backend: Backend::Memory,
            level: Level::Debug,
            format: LogFormat::Compact,
        })
        .unwrap();
        assert!(binder.logger_factory_name().ends_with("MemoryLoggerFactory"));

        let info = binder.info();
        assert_eq!(info.backend, "memory");
        assert_eq!(info.level, Level::Debug);
        assert_eq!(info.requested_api_version, "1.7");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = LoggerBinder::new(BinderConfig {
            backend: Backend::Memory,
            level: Level::Info,
            format: LogFormat::Json,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_backend_records_are_readable() {
        let binder = LoggerBinder::new(BinderConfig {
            backend: Backend::Memory,
            level: Level::Info,
            format: LogFormat::Compact,
        })
        .unwrap();

        binder.logger("x").info("hello");
        binder.logger("x").debug("below level");

        let records = binder.memory_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].logger, "x");
        assert_eq!(records[0].message, "hello");
    }

    #[test]
    fn test_tracing_backend_has_no_memory_records() {
        assert!(LoggerBinder::default().memory_records().is_none());
    }

    #[test]
    fn test_with_factory_reports_factory_backend() {
        let factory = Arc::new(MemoryLoggerFactory::new(Level::Warn));
        let binder = LoggerBinder::with_factory(factory, BinderConfig::default());

        let info = binder.info();
        assert_eq!(info.backend, "memory");
        assert_eq!(info.level, Level::Warn);
        assert!(info.factory_name.ends_with("MemoryLoggerFactory"));
        assert_eq!(binder.config().backend, Backend::Memory);
        assert_eq!(binder.config().level, Level::Warn);
    }

    #[test]
    fn test_with_factory_keeps_format_only_for_tracing() {
        let json = BinderConfig {
            format: LogFormat::Json,
            ..BinderConfig::default()
        };

        let tracing_binder =
            LoggerBinder::with_factory(Arc::new(TracingLoggerFactory::default()), json.clone());
        assert_eq!(tracing_binder.config().format, LogFormat::Json);

        let memory_binder =
            LoggerBinder::with_factory(Arc::new(MemoryLoggerFactory::default()), json);
        assert_eq!(memory_binder.config().format, LogFormat::Compact);
        assert!(memory_binder.config().validate().is_ok());
    }

    #[test]
    fn test_binder_hands_out_cached_loggers() {
        let binder = LoggerBinder::default();
        let a = binder.logger("app");
        let b = binder.logger("app");
        assert!(Arc::ptr_eq(&a, &b));
    }
}
