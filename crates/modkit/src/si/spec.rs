//! Parsing of the `S<digits>[,<min>[,<max>]]` format token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Significant digits used by a bare `S` token
pub const DEFAULT_DIGITS: u32 = 3;

/// Largest digit count a token may request
pub const MAX_DIGITS: u32 = 99;

/// Magnitude bounds restricting which prefixes may be chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnitudeRange {
    /// Smallest base-10 magnitude, e.g. -3 to allow nothing below milli
    pub min: i32,
    /// Largest base-10 magnitude, e.g. 9 to allow nothing above giga
    pub max: i32,
}

impl Default for MagnitudeRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: i32::MAX,
        }
    }
}

/// A parsed SI format request.
///
/// Without a magnitude range the value is rendered to `digits` significant
/// figures ([`super::to_si`]); with one, `digits` is the number of decimal
/// places and the prefix is bounded ([`super::to_si_bounded`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSpec {
    pub digits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<MagnitudeRange>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS)
    }
}

impl FormatSpec {
    pub fn new(digits: u32) -> Self {
        Self {
            digits,
            magnitude: None,
        }
    }

    pub fn bounded(digits: u32, min_magnitude: i32, max_magnitude: i32) -> Self {
        Self {
            digits,
            magnitude: Some(MagnitudeRange {
                min: min_magnitude,
                max: max_magnitude,
            }),
        }
    }

    pub fn min_magnitude(&self) -> i32 {
        self.magnitude.unwrap_or_default().min
    }

    pub fn max_magnitude(&self) -> i32 {
        self.magnitude.unwrap_or_default().max
    }

    pub fn is_bounded(&self) -> bool {
        self.magnitude.is_some()
    }
}

impl FromStr for FormatSpec {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let body = match chars.next() {
            None => return Err(Error::MalformedFormat("Format string is empty".to_string())),
            Some('S' | 's') => chars.as_str(),
            Some(other) => {
                return Err(Error::Parse(format!(
                    "'{}' is not an SI format (expected 'S', found '{}')",
                    token, other
                )));
            }
        };

        if body.is_empty() {
            return Ok(Self::default());
        }

        let fields: Vec<&str> = body.split(',').collect();
        if fields.len() > 3 {
            return Err(Error::Parse(format!(
                "'{}' has {} fields, at most 3 are allowed",
                token,
                fields.len()
            )));
        }

        let digits: u32 = parse_field(token, fields[0])?;
        if digits == 0 {
            return Err(Error::Parse(format!(
                "'{}' requests 0 digits, at least 1 is required",
                token
            )));
        }
        if digits > MAX_DIGITS {
            return Err(Error::Parse(format!(
                "'{}' requests {} digits, at most {} are allowed",
                token, digits, MAX_DIGITS
            )));
        }

        if fields.len() == 1 {
            return Ok(Self::new(digits));
        }

        let min = parse_field(token, fields[1])?;
        let max = match fields.get(2) {
            Some(field) => parse_field(token, field)?,
            None => MagnitudeRange::default().max,
        };
        if min > max {
            return Err(Error::Parse(format!(
                "'{}' has minimum magnitude {} above maximum {}",
                token, min, max
            )));
        }

        Ok(Self::bounded(digits, min, max))
    }
}

fn parse_field<T>(token: &str, field: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    field
        .trim()
        .parse()
        .map_err(|e| Error::Parse(format!("invalid field '{}' in '{}': {}", field, token, e)))
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.digits)?;
        if let Some(range) = self.magnitude {
            write!(f, ",{}", range.min)?;
            if range.max != i32::MAX {
                write!(f, ",{}", range.max)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_token() {
        let spec: FormatSpec = "S".parse().unwrap();
        assert_eq!(spec.digits, 3);
        assert_eq!(spec.min_magnitude(), 0);
        assert_eq!(spec.max_magnitude(), i32::MAX);
        assert!(!spec.is_bounded());
    }

    #[test]
    fn test_parse_digits_only() {
        let spec: FormatSpec = "S5".parse().unwrap();
        assert_eq!(spec, FormatSpec::new(5));

        let lower: FormatSpec = "s2".parse().unwrap();
        assert_eq!(lower.digits, 2);
    }

    #[test]
    fn test_parse_full_token() {
        let spec: FormatSpec = "S3,-3,9".parse().unwrap();
        assert_eq!(spec.digits, 3);
        assert_eq!(spec.min_magnitude(), -3);
        assert_eq!(spec.max_magnitude(), 9);
        assert!(spec.is_bounded());
    }

    #[test]
    fn test_parse_min_only() {
        let spec: FormatSpec = "S2,-6".parse().unwrap();
        assert_eq!(spec.min_magnitude(), -6);
        assert_eq!(spec.max_magnitude(), i32::MAX);
    }

    #[test]
    fn test_parse_errors() {
        assert!("Sabc".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("S3,x".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("S3,1,2,4".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("S0".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("F2".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("S3,,9".parse::<FormatSpec>().unwrap_err().is_parse());
    }

    #[test]
    fn test_digit_limit() {
        assert_eq!("S99".parse::<FormatSpec>().unwrap().digits, MAX_DIGITS);
        assert!("S100".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("S70000".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("S70000,-3,9".parse::<FormatSpec>().unwrap_err().is_parse());
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        assert!("S2,9,-3".parse::<FormatSpec>().unwrap_err().is_parse());
        assert!("S2,-3,-3".parse::<FormatSpec>().is_ok());
    }

    #[test]
    fn test_parse_empty_token() {
        let err = "".parse::<FormatSpec>().unwrap_err();
        assert!(matches!(err, Error::MalformedFormat(_)));
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(FormatSpec::new(4).to_string(), "S4");
        assert_eq!(FormatSpec::bounded(3, -3, 9).to_string(), "S3,-3,9");
        assert_eq!("S2,-6".parse::<FormatSpec>().unwrap().to_string(), "S2,-6");
    }

    #[test]
    fn test_serialize_spec() {
        let json = serde_json::to_string(&FormatSpec::new(3)).unwrap();
        assert_eq!(json, r#"{"digits":3}"#);

        let bounded = serde_json::to_string(&FormatSpec::bounded(2, -3, 9)).unwrap();
        assert_eq!(bounded, r#"{"digits":2,"magnitude":{"min":-3,"max":9}}"#);
    }
}
