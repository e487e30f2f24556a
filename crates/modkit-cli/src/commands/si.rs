//! Format a single number.

use modkit::Config;
use modkit::si::{FormatSpec, MagnitudeRange, format_si};
use tracing::debug;

/// Format `value`; a `min` or `max` switches to the bounded form
pub fn run(
    config: &Config,
    value: f64,
    digits: Option<u32>,
    min: Option<i32>,
    max: Option<i32>,
) -> String {
    let default = config.default_spec();
    let digits = digits.unwrap_or(default.digits);
    let spec = if min.is_some() || max.is_some() {
        let range = MagnitudeRange::default();
        FormatSpec::bounded(
            digits,
            min.unwrap_or(range.min),
            max.unwrap_or(range.max),
        )
    } else {
        FormatSpec::new(digits)
    };

    debug!("Formatting {} with {}", value, spec);
    format_si(value, &spec)
}
