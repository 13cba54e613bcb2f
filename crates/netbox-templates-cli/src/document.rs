//! Object definition documents
//!
//! A document lists NetBox objects to render and may pin the API version:
//!
//! ```yaml
//! api_version: "2.10"
//! objects:
//!   - kind: manufacturer
//!     name: Dell
//!   - kind: device_type
//!     manufacturer: Dell
//!     model: PowerEdge R640
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use netbox_templates::{ApiVersion, ObjectTemplate, Payload, Templates, TemplatesConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Parsed definition document
#[derive(Debug, Deserialize)]
pub struct Document {
    /// Overrides the configured API version
    #[serde(default)]
    pub api_version: Option<ApiVersion>,
    pub objects: Vec<ObjectTemplate>,
}

/// Payload together with the endpoint it is posted to
#[derive(Debug, Serialize)]
pub struct RenderedPayload {
    pub path: String,
    pub body: Payload,
}

impl Document {
    /// Read and parse a YAML (or JSON) document
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid object definitions in {}", path.display()))
    }

    /// Parse a YAML (or JSON) document
    pub fn parse(text: &str) -> Result<Self> {
        let document: Document = serde_yaml::from_str(text)?;
        debug!("Parsed {} object definitions", document.objects.len());
        Ok(document)
    }

    /// Templates for this document, preferring its own API version
    pub fn templates(&self, config: &TemplatesConfig) -> Templates {
        match &self.api_version {
            Some(version) => Templates::new(version.clone()),
            None => Templates::from_config(config),
        }
    }

    /// Render every object in order, stopping at the first failure
    pub fn render(&self, templates: &Templates) -> Result<Vec<RenderedPayload>> {
        info!(
            "Rendering {} objects for NetBox API {}",
            self.objects.len(),
            templates.api_version()
        );

        let mut rendered = Vec::with_capacity(self.objects.len());
        for (index, object) in self.objects.iter().enumerate() {
            let (resource, body) = templates
                .render(object)
                .with_context(|| format!("Object #{} could not be rendered", index + 1))?;
            rendered.push(RenderedPayload {
                path: resource.path(),
                body,
            });
        }
        Ok(rendered)
    }
}
