use crate::domain::model::{Backend, Level, LogRecord};
use std::sync::Arc;

/// A named logger handed out by a [`LoggerFactory`].
pub trait Logger: Send + Sync {
    fn name(&self) -> &str;
    fn is_enabled(&self, level: Level) -> bool;
    fn log(&self, record: LogRecord);

    fn emit(&self, level: Level, message: &str) {
        if self.is_enabled(level) {
            self.log(LogRecord::new(level, self.name(), message));
        }
    }

    fn trace(&self, message: &str) {
        self.emit(Level::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

/// Resolves loggers by name. Asking twice for the same name yields the same logger.
pub trait LoggerFactory: Send + Sync {
    fn logger(&self, name: &str) -> Arc<dyn Logger>;
    fn name(&self) -> &str;
    fn backend(&self) -> Backend;
    fn min_level(&self) -> Level;

    /// Records held by the factory, for backends that keep them.
    fn captured_records(&self) -> Option<Vec<LogRecord>> {
        None
    }
}

/// The capability a logging facade expects from its binding.
pub trait ExternalLogger: Send + Sync {
    fn logger_factory(&self) -> &dyn LoggerFactory;

    fn logger_factory_name(&self) -> &str {
        self.logger_factory().name()
    }

    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        self.logger_factory().logger(name)
    }
}
