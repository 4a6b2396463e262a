// Facade/binder API version compatibility.

use crate::utils::error::{BinderError, Result};
use std::fmt;
use std::str::FromStr;

/// Facade API versions this binder can serve. A requested version is
/// compatible when it starts with one of these entries.
pub const API_COMPATIBILITY_LIST: &[&str] = &["1.6", "1.7"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl ApiVersion {
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = |reason: &str| BinderError::InvalidVersion {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = value.trim().split('.');
        let major = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| invalid("missing major component"))?
            .parse::<u32>()
            .map_err(|_| invalid("major component is not a number"))?;
        let minor = parts
            .next()
            .ok_or_else(|| invalid("missing minor component"))?
            .parse::<u32>()
            .map_err(|_| invalid("minor component is not a number"))?;

        // patch/qualifier suffixes such as "1.7.36" are tolerated
        Ok(Self { major, minor })
    }
}

impl FromStr for ApiVersion {
    type Err = BinderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Checks `requested` against a compatibility list using prefix matching.
pub fn check_compatibility(requested: &str, compatible: &[&str]) -> Result<()> {
    let requested = requested.trim();
    ApiVersion::parse(requested)?;

    if compatible.iter().any(|entry| requested.starts_with(entry)) {
        tracing::debug!(requested = requested, "API version is compatible");
        return Ok(());
    }

    tracing::warn!(
        requested = requested,
        supported = ?compatible,
        "requested API version is not compatible"
    );
    Err(BinderError::VersionMismatch {
        requested: requested.to_string(),
        supported: compatible.iter().map(|s| s.to_string()).collect(),
    })
}
