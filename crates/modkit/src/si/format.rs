use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::prefix::{MAX_TIER, ScaledValue, SiPrefix};
use super::spec::{FormatSpec, MAX_DIGITS};

/// Render special values that never reach the prefix table
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

/// Format a value with an SI prefix, keeping roughly `sig_figs` significant figures.
///
/// Zero renders as `"0.0"`, NaN as `"NaN"` and infinities as `"∞"`/`"-∞"`.
/// Values below one get one extra decimal of headroom. When the fixed-point
/// rendering would need fewer than zero decimals the value is truncated
/// (not rounded) to its leading digits. Values beyond yotta/yocto are clamped
/// to the extreme prefix and written in general notation.
///
/// `sig_figs` is clamped to `1..=MAX_DIGITS`.
pub fn to_si(value: f64, sig_figs: u32) -> String {
    let sig_figs = sig_figs.clamp(1, MAX_DIGITS);
    if value == 0.0 {
        return "0.0".to_string();
    }
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }

    let abs = value.abs();
    let digits = i64::from(sig_figs);
    let mut magnitude = abs.log10().floor() as i64;

    let (baseline, significance) = if magnitude < 0 || abs < 1.0 {
        (1, 1)
    } else {
        (0, digits / 3 * 3)
    };

    let divisor_exp = if magnitude.abs() >= significance {
        magnitude - significance
    } else {
        0
    };

    // Anything past ±(MAX_TIER + 1) tiers lands in the same clamped bucket
    let limit = i64::from((MAX_TIER + 1) * 3);
    let scaled = ScaledValue::from_divisor_exponent(value, divisor_exp.clamp(-limit, limit) as i32);

    if scaled.clamped {
        let precision = if sig_figs < 5 { 2 } else { sig_figs - 3 };
        return format!(
            "{}{}",
            format_general(scaled.mantissa, precision as usize),
            scaled.prefix
        );
    }

    magnitude -= i64::from(scaled.exponent());

    let mut mantissa = scaled.mantissa;
    let mut decimal_places = baseline + digits - magnitude - 1;
    if decimal_places < 0 {
        let divisor = 10f64.powi((-decimal_places) as i32);
        mantissa = (mantissa / divisor).trunc() * divisor;
        decimal_places = 0;
    }

    format!("{:.*}{}", decimal_places as usize, mantissa, scaled.prefix)
}

/// Format a value with a fixed number of decimals and a prefix chosen from a
/// clamped magnitude range.
///
/// The base-10 magnitude of `value` is clamped into `min_magnitude..=max_magnitude`
/// before picking the prefix, so `-3` forbids anything below milli and `9`
/// anything above giga. Zero is treated as having the minimum magnitude.
/// Reversed bounds are swapped and `decimal_digits` is capped at
/// [`MAX_DIGITS`].
pub fn to_si_bounded(
    value: f64,
    decimal_digits: u32,
    min_magnitude: i32,
    max_magnitude: i32,
) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }

    let decimal_digits = decimal_digits.min(MAX_DIGITS);
    let (min_magnitude, max_magnitude) = if min_magnitude <= max_magnitude {
        (min_magnitude, max_magnitude)
    } else {
        (max_magnitude, min_magnitude)
    };

    let mut exponent = value.abs().log10();
    if exponent < f64::from(min_magnitude) {
        exponent = f64::from(min_magnitude);
    } else if exponent > f64::from(max_magnitude) {
        exponent = f64::from(max_magnitude);
    }

    let tier = (exponent.floor() as i64)
        .div_euclid(3)
        .clamp(-i64::from(MAX_TIER), i64::from(MAX_TIER)) as i32;
    let prefix = SiPrefix::from_tier(tier);

    format!(
        "{:.*}{}",
        decimal_digits as usize,
        prefix.scale(value),
        prefix
    )
}

/// Format a value according to a parsed [`FormatSpec`]
pub fn format_si(value: f64, spec: &FormatSpec) -> String {
    match spec.magnitude {
        None => to_si(value, spec.digits),
        Some(range) => to_si_bounded(value, spec.digits, range.min, range.max),
    }
}

/// General ("G") notation with `precision` significant digits.
///
/// Uses fixed notation unless the decimal exponent is below -5 or at least
/// `precision`, in which case it switches to `1.5E+06` style. Trailing zeros
/// in the fraction are dropped. `precision` is clamped to `1..=MAX_DIGITS`.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.clamp(1, MAX_DIGITS as usize);
    if value == 0.0 {
        return "0".to_string();
    }
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exp.parse::<i32>() else {
        return scientific;
    };

    if exponent < -5 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Read back a string produced by [`to_si`] or [`to_si_bounded`]
pub fn parse_si(text: &str) -> Result<f64> {
    let text = text.trim();
    match text {
        "NaN" => return Ok(f64::NAN),
        "∞" => return Ok(f64::INFINITY),
        "-∞" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    let (number, prefix) = match text.chars().last() {
        Some(c) if !c.is_ascii_digit() && c != '.' => {
            let split = text.len() - c.len_utf8();
            match SiPrefix::from_str(&text[split..]) {
                Ok(prefix) => (&text[..split], prefix),
                Err(_) => (text, SiPrefix::Base),
            }
        }
        _ => (text, SiPrefix::Base),
    };

    let mantissa: f64 = number
        .parse()
        .map_err(|e| Error::Parse(format!("invalid SI value '{}': {}", text, e)))?;

    Ok(prefix.unscale(mantissa))
}

/// A number paired with an SI format, rendered through `Display`.
///
/// Width and alignment flags of the surrounding format string are honored:
/// `format!("{:>8}", 1234.5_f64.si(FormatSpec::new(3)))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiValue {
    pub value: f64,
    pub spec: FormatSpec,
}

impl SiValue {
    pub fn new(value: f64, spec: FormatSpec) -> Self {
        Self { value, spec }
    }
}

impl fmt::Display for SiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_si(self.value, &self.spec))
    }
}

/// SI formatting for anything losslessly convertible to `f64`
pub trait ToSi {
    /// See [`to_si`]
    fn to_si(self, sig_figs: u32) -> String;

    /// Wrap the value for use with `format!`
    fn si(self, spec: FormatSpec) -> SiValue;
}

impl<T: Into<f64>> ToSi for T {
    fn to_si(self, sig_figs: u32) -> String {
        to_si(self.into(), sig_figs)
    }

    fn si(self, spec: FormatSpec) -> SiValue {
        SiValue::new(self.into(), spec)
    }
}
