use crate::config::{BinderConfig, LogFormat};
use crate::domain::model::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn level_filter(level: Level) -> LevelFilter {
    LevelFilter::from_level(level.into())
}

/// Installs a global subscriber matching the binder configuration.
///
/// `RUST_LOG` wins over the configured level. Returns `false` when another
/// subscriber was already set (common in tests), in which case nothing changes.
pub fn init_from_config(config: &BinderConfig) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(config.level).into())
        .from_env_lossy();

    let fmt = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt.compact())
            .try_init()
            .is_ok(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json())
            .try_init()
            .is_ok(),
    }
}
