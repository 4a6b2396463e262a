// In-memory logger factory for test harnesses. All loggers of one factory
// append into a single bounded buffer, oldest records evicted first.

use super::LoggerCache;
use crate::domain::model::{Backend, Level, LogRecord};
use crate::domain::ports::{Logger, LoggerFactory};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const DEFAULT_CAPACITY: usize = 10_000;

struct Buffer {
    records: VecDeque<LogRecord>,
    capacity: usize,
}

type SharedBuffer = Arc<Mutex<Buffer>>;

pub struct MemoryLogger {
    name: String,
    min_level: Level,
    buffer: SharedBuffer,
}

impl Logger for MemoryLogger {
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
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        if buffer.records.len() == buffer.capacity {
            buffer.records.pop_front();
        }
        buffer.records.push_back(record);
    }
}

pub struct MemoryLoggerFactory {
    min_level: Level,
    buffer: SharedBuffer,
    cache: LoggerCache,
}

impl MemoryLoggerFactory {
    pub fn new(min_level: Level) -> Self {
        Self::with_capacity(min_level, DEFAULT_CAPACITY)
    }

    /// `capacity` is clamped to at least one record.
    pub fn with_capacity(min_level: Level, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            min_level,
            buffer: Arc::new(Mutex::new(Buffer {
                records: VecDeque::with_capacity(capacity.min(1024)),
                capacity,
            })),
            cache: LoggerCache::default(),
        }
    }

    pub(crate) fn make_logger(&self, name: &str) -> MemoryLogger {
        MemoryLogger {
            name: name.to_string(),
            min_level: self.min_level,
            buffer: Arc::clone(&self.buffer),
        }
    }

    /// Snapshot of everything captured so far.
    pub fn records(&self) -> Vec<LogRecord> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.records.iter().cloned().collect()
    }

    pub fn records_for(&self, logger: &str) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.logger == logger)
            .collect()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .records
            .clear();
    }
}

impl Default for MemoryLoggerFactory {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl LoggerFactory for MemoryLoggerFactory {
    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        self.cache
            .get_or_insert_with(name, || Arc::new(self.make_logger(name)))
    }

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn backend(&self) -> Backend {
        Backend::Memory
    }

    fn min_level(&self) -> Level {
        self.min_level
    }

    fn captured_records(&self) -> Option<Vec<LogRecord>> {
        Some(self.records())
    }
}
