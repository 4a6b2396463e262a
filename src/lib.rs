pub mod adapters;
pub mod binder;
pub mod config;
pub mod domain;
pub mod utils;
pub mod version;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use binder::{LoggerBinder, REQUESTED_API_VERSION};
pub use config::{Backend, BinderConfig, LogFormat};
pub use domain::model::{BinderInfo, Level, LogRecord};
pub use domain::ports::{ExternalLogger, Logger, LoggerFactory};
pub use utils::error::{BinderError, Result};
pub use version::{check_compatibility, ApiVersion, API_COMPATIBILITY_LIST};
