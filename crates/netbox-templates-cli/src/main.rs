//! NetBox Templates CLI
//!
//! Renders NetBox API request bodies from a YAML document of object
//! definitions and prints one JSON line per object:
//!
//! ```text
//! {"path":"/api/dcim/manufacturers/","body":{"name":"Dell","slug":"dell"}}
//! ```
//!
//! The target API version comes from the document's `api_version`, falling
//! back to `NETBOX_API_VERSION` (default 2.10). Logs go to stderr and are
//! filtered with `RUST_LOG`.

mod document;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use document::Document;
use netbox_templates::TemplatesConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let Some(path) = env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: netbox-templates <objects.yaml>");
    };

    let config = TemplatesConfig::from_env().context("Invalid NETBOX_API_VERSION")?;
    info!("Configuration:");
    info!("  Definitions: {}", path.display());
    info!("  NetBox API version: {}", config.api_version);

    let document = Document::load(&path)?;
    let templates = document.templates(&config);
    let rendered = document.render(&templates)?;

    let mut stdout = io::stdout().lock();
    for payload in &rendered {
        serde_json::to_writer(&mut stdout, payload)?;
        writeln!(stdout)?;
    }

    info!("Rendered {} payloads", rendered.len());
    Ok(())
}
