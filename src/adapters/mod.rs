// Adapters layer: concrete logger factories behind the domain ports.

pub mod memory;
pub mod tracing_factory;

pub use memory::{MemoryLogger, MemoryLoggerFactory};
pub use tracing_factory::{TracingLogger, TracingLoggerFactory};

use crate::domain::ports::Logger;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Name-keyed logger cache shared by the factories.
#[derive(Default)]
pub(crate) struct LoggerCache {
    loggers: RwLock<HashMap<String, Arc<dyn Logger>>>,
}

impl LoggerCache {
    pub(crate) fn get_or_insert_with<F>(&self, name: &str, make: F) -> Arc<dyn Logger>
    where
        F: FnOnce() -> Arc<dyn Logger>,
    {
        {
            let loggers = self.loggers.read().unwrap_or_else(|e| e.into_inner());
            if let Some(logger) = loggers.get(name) {
                return Arc::clone(logger);
            }
        }

        let mut loggers = self.loggers.write().unwrap_or_else(|e| e.into_inner());
        // another thread may have won the race between the two locks
        Arc::clone(loggers.entry(name.to_string()).or_insert_with(make))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.loggers.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_returns_same_logger_for_same_name() {
        let factory = MemoryLoggerFactory::new(crate::domain::model::Level::Info);
        let cache = LoggerCache::default();

        let a = cache.get_or_insert_with("app", || Arc::new(factory.make_logger("app")));
        let b = cache.get_or_insert_with("app", || Arc::new(factory.make_logger("app")));
        let c = cache.get_or_insert_with("db", || Arc::new(factory.make_logger("db")));

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }
}
