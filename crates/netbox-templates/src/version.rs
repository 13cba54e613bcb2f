//! NetBox API version parsing
//!
//! NetBox reports its API version as a dotted string (e.g. `2.10.3`).
//! Versions are compared componentwise, so `2.10` sorts after `2.6`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::TemplateError;

/// Last API version that used integer codes for choice fields
pub const LEGACY_CHOICES_MAX: [u32; 2] = [2, 6];

/// Parsed NetBox API version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    components: Vec<u32>,
}

impl ApiVersion {
    /// Create a version from its components, e.g. `[2, 10, 3]`
    pub fn new(components: impl Into<Vec<u32>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Parse a dotted version string such as `"2.10.3"`
    ///
    /// Every `.`-separated segment must be an unsigned integer.
    pub fn parse(version: &str) -> Result<Self, TemplateError> {
        let components = version
            .trim()
            .split('.')
            .map(|part| {
                part.parse::<u32>().map_err(|e| {
                    TemplateError::InvalidVersion(format!("{version}: segment {part:?}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }

    /// Version components, most significant first
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Whether this API version expects symbolic names for choice fields
    pub fn uses_named_choices(&self) -> bool {
        self.components() > &LEGACY_CHOICES_MAX[..]
    }
}

impl FromStr for ApiVersion {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components().iter().map(u32::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // YAML and JSON read `2.6` as a float; `2.10` comes through as `2.1`.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(u64),
            Float(f64),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Integer(major) => major.to_string(),
            Raw::Float(value) => {
                let text = value.to_string();
                warn!("API version {} given as a number, quote it to keep trailing zeros", text);
                text
            }
        };
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
