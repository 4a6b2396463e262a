use anyhow::Context;
use clap::Parser;
use odin_binder::utils::{logger, validation::validate_path};
use odin_binder::{
    check_compatibility, BinderConfig, BinderError, CliConfig, ExternalLogger, Level,
    LoggerBinder, API_COMPATIBILITY_LIST,
};

fn load_config(config: &CliConfig) -> Result<BinderConfig, BinderError> {
    let mut binder_config = match &config.config {
        Some(path) => {
            validate_path("config", path)?;
            BinderConfig::from_file(path)?
        }
        None => BinderConfig::default(),
    };
    if config.verbose {
        binder_config.level = binder_config.level.min(Level::Debug);
    }
    Ok(binder_config)
}

fn install_binder(
    config: &CliConfig,
    binder_config: BinderConfig,
) -> Result<&'static LoggerBinder, BinderError> {
    let binder = LoggerBinder::install(LoggerBinder::new(binder_config)?)?;
    binder.check_facade_compatibility()?;

    if let Some(requested) = &config.check_version {
        check_compatibility(requested, API_COMPATIBILITY_LIST)?;
        tracing::info!("✅ API version {} is compatible", requested.trim());
    }

    binder.logger("odin_binder.cli").debug("binder installed");
    Ok(binder)
}

fn report(binder: &LoggerBinder, json: bool) -> anyhow::Result<()> {
    let info = binder.info();
    if json {
        let out =
            serde_json::to_string_pretty(&info).context("failed to serialize binder info")?;
        println!("{}", out);
        return Ok(());
    }

    println!("requested API version: {}", info.requested_api_version);
    println!("logger factory:        {}", info.factory_name);
    println!("backend:               {}", info.backend);
    println!("level:                 {}", info.level);

    if let Some(records) = binder.memory_records() {
        println!("captured records:      {}", records.len());
        for record in records {
            println!(
                "  {} {:<5} {}: {}",
                record.timestamp.to_rfc3339(),
                record.level,
                record.logger,
                record.message
            );
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let binder_config = match load_config(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    logger::init_from_config(&binder_config);
    tracing::debug!("CLI config: {:?}", config);

    let binder = match install_binder(&config, binder_config) {
        Ok(binder) => binder,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    report(binder, config.json)?;
    Ok(())
}
