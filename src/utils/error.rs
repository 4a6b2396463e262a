use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid API version string '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("Requested API version {requested} is not compatible with [{}]", .supported.join(", "))]
    VersionMismatch {
        requested: String,
        supported: Vec<String>,
    },

    #[error("A logger binder is already installed for this process")]
    AlreadyInstalled,
}

impl BinderError {
    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            BinderError::VersionMismatch { .. } | BinderError::InvalidVersion { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BinderError>;
