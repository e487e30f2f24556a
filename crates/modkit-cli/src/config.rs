//! Config file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use modkit::Config;

/// Read a TOML config file; missing keys take their defaults
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse(&content).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
