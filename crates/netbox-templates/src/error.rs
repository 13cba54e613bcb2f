//! Template errors

use thiserror::Error;

use crate::choices::{FieldKind, ObjectKind};

/// Errors that can occur when building NetBox payloads
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Mutually exclusive or otherwise conflicting arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No symbolic name exists for the legacy integer choice
    #[error("Unknown choice {value} for {object}.{field}")]
    UnknownChoice {
        /// Object kind the lookup was made for
        object: ObjectKind,
        /// Field of the object kind
        field: FieldKind,
        /// Legacy integer value that has no entry
        value: i64,
    },

    /// API version string could not be parsed
    #[error("Invalid API version: {0}")]
    InvalidVersion(String),
}
