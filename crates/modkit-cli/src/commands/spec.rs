//! Show how an SI format token is understood.

use anyhow::Result;
use modkit::si::FormatSpec;

pub fn run(token: &str) -> Result<String> {
    let spec: FormatSpec = token.parse()?;
    Ok(serde_json::to_string_pretty(&spec)?)
}
