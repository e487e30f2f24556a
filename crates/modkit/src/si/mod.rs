//! SI-prefix number formatting.
//!
//! Turns an arbitrary `f64` into a short human readable string with a metric
//! prefix, e.g. `12345678.0` with three significant figures becomes `"12.3M"`.
//!
//! - **Prefixes**: the fixed yocto..=yotta table ([`SiPrefix`])
//! - **Format tokens**: `S<digits>[,<min>[,<max>]]` ([`FormatSpec`])
//! - **Rendering**: [`to_si`] (significant figures) and [`to_si_bounded`]
//!   (fixed decimals within a magnitude range)

mod format;
mod prefix;
mod spec;

pub use format::{SiValue, ToSi, format_general, format_si, parse_si, to_si, to_si_bounded};
pub use prefix::{MAX_TIER, ScaledValue, SiPrefix, tier_for_divisor_exponent};
pub use spec::{DEFAULT_DIGITS, FormatSpec, MAX_DIGITS, MagnitudeRange};
