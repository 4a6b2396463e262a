#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub use crate::domain::model::Backend;

use crate::domain::model::Level;
use crate::utils::error::{BinderError, Result};
use crate::utils::validation::{validate_level, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Validated binder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinderConfig {
    pub backend: Backend,
    pub level: Level,
    pub format: LogFormat,
}

/// On-disk shape of the config file, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub binder: BinderSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinderSection {
    pub backend: Option<Backend>,
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl BinderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        let raw: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| BinderError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        let level = match raw.binder.level.as_deref() {
            Some(value) => validate_level("binder.level", value)?,
            None => Level::default(),
        };

        let config = Self {
            backend: raw.binder.backend.unwrap_or_default(),
            level,
            format: raw.binder.format.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for BinderConfig {
    fn validate(&self) -> Result<()> {
        // json output only makes sense when records reach a subscriber
        if self.backend == Backend::Memory && self.format == LogFormat::Json {
            return Err(BinderError::InvalidConfigValueError {
                field: "binder.format".to_string(),
                value: "json".to_string(),
                reason: "the memory backend does not write formatted output".to_string(),
            });
        }
        Ok(())
    }
}

/// 替換環境變數 (例如 ${LOG_LEVEL})
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BinderError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
