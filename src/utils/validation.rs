use crate::domain::model::Level;
use crate::utils::error::{BinderError, Result};
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_level(field_name: &str, value: &str) -> Result<Level> {
    Level::from_str(value).map_err(|_| BinderError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "expected one of trace, debug, info, warn, error".to_string(),
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
