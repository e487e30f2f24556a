//! Expand a composite format template from command-line arguments.

use anyhow::Result;
use modkit::text::{FormatArg, format};

/// Classify a raw argument: integer first, then float, otherwise text
fn classify(raw: &str) -> FormatArg<'_> {
    if let Ok(v) = raw.parse::<i64>() {
        FormatArg::Int(v)
    } else if let Ok(v) = raw.parse::<f64>() {
        FormatArg::Float(v)
    } else {
        FormatArg::Text(raw)
    }
}

pub fn run(template: &str, args: &[String]) -> Result<String> {
    let args: Vec<FormatArg<'_>> = args.iter().map(|a| classify(a)).collect();
    Ok(format(template, &args)?)
}
