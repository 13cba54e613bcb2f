//! NetBox Object Templates
//!
//! Builds request bodies for the NetBox REST API object-creation endpoints.
//! Payloads are formatted for a specific NetBox API version: choice fields
//! given as pre-2.7 integer codes are translated into symbolic names when the
//! target API is newer than v2.6.
//!
//! # Example
//!
//! ```
//! use netbox_templates::{ChoiceValue, DeviceParams, Templates};
//!
//! # fn example() -> Result<(), netbox_templates::TemplateError> {
//! let templates = Templates::from_version_str("2.10.3")?;
//!
//! let device = templates.device(&DeviceParams {
//!     name: "edge01".to_string(),
//!     device_role: "Router".to_string(),
//!     device_type: "MX204".to_string(),
//!     site: Some("AMS1".to_string()),
//!     status: Some(ChoiceValue::Legacy(1)),
//!     ..Default::default()
//! })?;
//!
//! assert_eq!(device["status"], "active");
//! assert_eq!(device["site"]["name"], "AMS1");
//! assert!(!device.contains_key("serial"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - **DCIM**: devices, device types, interfaces, manufacturers
//! - **Virtualization**: clusters, cluster groups, virtual machines and their interfaces
//! - **IPAM**: IP addresses bound to device or VM interfaces
//! - **Version Awareness**: legacy choice codes translated per API version

pub mod choices;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod resource;
pub mod templates;
pub mod version;

pub use choices::{ChoiceValue, FieldKind, ObjectKind};
pub use config::TemplatesConfig;
pub use error::TemplateError;
pub use format::{Payload, format_slug, remove_empty_fields, truncate};
pub use models::*;
pub use resource::Resource;
pub use templates::Templates;
pub use version::ApiVersion;
