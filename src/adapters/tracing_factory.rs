use super::LoggerCache;
use crate::domain::model::{Backend, Level, LogRecord};
use crate::domain::ports::{Logger, LoggerFactory};
use std::sync::Arc;

pub struct TracingLogger {
    name: String,
    min_level: Level,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>, min_level: Level) -> Self {
        Self {
            name: name.into(),
            min_level,
        }
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn log(&self, record: LogRecord) {
        if !self.is_enabled(record.level) {
            return;
        }
        // tracing's macros need the level as a constant, hence the match
        let logger = record.logger.as_str();
        let message = record.message.as_str();
        match record.level {
            Level::Trace => tracing::trace!(logger = logger, "{}", message),
            Level::Debug => tracing::debug!(logger = logger, "{}", message),
            Level::Info => tracing::info!(logger = logger, "{}", message),
            Level::Warn => tracing::warn!(logger = logger, "{}", message),
            Level::Error => tracing::error!(logger = logger, "{}", message),
        }
    }
}

/// Routes every logger into the `tracing` ecosystem.
pub struct TracingLoggerFactory {
    min_level: Level,
    cache: LoggerCache,
}

impl TracingLoggerFactory {
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level,
            cache: LoggerCache::default(),
        }
    }
}

impl Default for TracingLoggerFactory {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        let min_level = self.min_level;
        self.cache
            .get_or_insert_with(name, || Arc::new(TracingLogger::new(name, min_level)))
    }

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn backend(&self) -> Backend {
        Backend::Tracing
    }

    fn min_level(&self) -> Level {
        self.min_level
    }
}
