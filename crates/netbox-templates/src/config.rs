//! Template configuration

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::version::ApiVersion;

/// Environment variable holding the target NetBox API version
pub const API_VERSION_ENV: &str = "NETBOX_API_VERSION";

/// API version assumed when none is configured
pub const DEFAULT_API_VERSION: [u32; 2] = [2, 10];

/// Settings for [`crate::Templates`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// NetBox API version payloads are formatted for
    pub api_version: ApiVersion,
}

impl TemplatesConfig {
    /// Create a config for the given API version
    pub fn new(api_version: ApiVersion) -> Self {
        Self { api_version }
    }

    /// Load the config from `NETBOX_API_VERSION`, defaulting to 2.10
    pub fn from_env() -> Result<Self, TemplateError> {
        Self::from_var(env::var(API_VERSION_ENV))
    }

    fn from_var(var: Result<String, env::VarError>) -> Result<Self, TemplateError> {
        match var {
            Ok(version) => Self::from_version_str(&version),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(raw)) => Err(TemplateError::InvalidVersion(format!(
                "{API_VERSION_ENV} is not valid UTF-8: {}",
                raw.to_string_lossy()
            ))),
        }
    }

    fn from_version_str(version: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(ApiVersion::parse(version)?))
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::new(DEFAULT_API_VERSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version() {
        let config = TemplatesConfig::default();
        assert_eq!(config.api_version.components(), &[2, 10]);
        assert!(config.api_version.uses_named_choices());
    }

    #[test]
    fn test_from_version_str() {
        let config = TemplatesConfig::from_version_str("2.6").unwrap();
        assert!(!config.api_version.uses_named_choices());
        assert!(TemplatesConfig::from_version_str("two").is_err());
    }

    #[test]
    fn test_from_var() {
        let unset = TemplatesConfig::from_var(Err(env::VarError::NotPresent)).unwrap();
        assert_eq!(unset, TemplatesConfig::default());

        let set = TemplatesConfig::from_var(Ok("2.6".to_string())).unwrap();
        assert_eq!(set.api_version.components(), &[2, 6]);
    }

    #[test]
    fn test_from_var_rejects_non_unicode() {
        let raw = std::ffi::OsString::from("2.\u{fffd}");
        let err = TemplatesConfig::from_var(Err(env::VarError::NotUnicode(raw))).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidVersion(_)), "got {err:?}");
    }

    #[test]
    fn test_deserialize() {
        let config: TemplatesConfig = serde_json::from_str(r#"{"api_version": "3.7.1"}"#).unwrap();
        assert_eq!(config.api_version.to_string(), "3.7.1");
    }
}
