use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Highest tier reachable in either direction (yotta / yocto)
pub const MAX_TIER: i32 = 8;

/// Exact powers of a thousand, indexed by tier
const POWERS: [f64; 9] = [1.0, 1e3, 1e6, 1e9, 1e12, 1e15, 1e18, 1e21, 1e24];

/// Metric prefix symbols from yocto (1e-24) to yotta (1e24)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum SiPrefix {
    #[strum(serialize = "y")]
    Yocto,
    #[strum(serialize = "z")]
    Zepto,
    #[strum(serialize = "a")]
    Atto,
    #[strum(serialize = "f")]
    Femto,
    #[strum(serialize = "p")]
    Pico,
    #[strum(serialize = "n")]
    Nano,
    #[strum(to_string = "µ", serialize = "u")]
    Micro,
    #[strum(serialize = "m")]
    Milli,
    #[default]
    #[strum(serialize = "")]
    Base,
    #[strum(serialize = "k")]
    Kilo,
    #[strum(serialize = "M")]
    Mega,
    #[strum(serialize = "G")]
    Giga,
    #[strum(serialize = "T")]
    Tera,
    #[strum(serialize = "P")]
    Peta,
    #[strum(serialize = "E")]
    Exa,
    #[strum(serialize = "Z")]
    Zetta,
    #[strum(serialize = "Y")]
    Yotta,
}

impl SiPrefix {
    /// Prefix for a tier (exponent / 3), clamped to yocto..=yotta
    pub fn from_tier(tier: i32) -> Self {
        let index = tier.clamp(-MAX_TIER, MAX_TIER) + MAX_TIER;
        Self::from_repr(index as u8).unwrap_or_default()
    }

    /// Prefix for an exact exponent; `None` unless it is a multiple of 3 within ±24
    pub fn from_exponent(exponent: i32) -> Option<Self> {
        if exponent % 3 != 0 || exponent.abs() > MAX_TIER * 3 {
            return None;
        }
        Some(Self::from_tier(exponent / 3))
    }

    pub fn tier(self) -> i32 {
        self as i32 - MAX_TIER
    }

    pub fn exponent(self) -> i32 {
        self.tier() * 3
    }

    pub fn symbol(self) -> &'static str {
        self.into()
    }

    /// Bring a value into this prefix's unit (12345 with kilo gives 12.345)
    pub fn scale(self, value: f64) -> f64 {
        let tier = self.tier();
        let power = POWERS[tier.unsigned_abs() as usize];
        if tier >= 0 { value / power } else { value * power }
    }

    /// Inverse of [`SiPrefix::scale`]
    pub fn unscale(self, value: f64) -> f64 {
        let tier = self.tier();
        let power = POWERS[tier.unsigned_abs() as usize];
        if tier >= 0 { value * power } else { value / power }
    }
}

/// Bucket a divisor exponent into a tier: 1..=3 is kilo, -1..=-3 is milli, and so on.
///
/// The result is not clamped; anything beyond ±[`MAX_TIER`] is out of the prefix table.
pub fn tier_for_divisor_exponent(divisor_exp: i32) -> i32 {
    (divisor_exp.abs() + 2) / 3 * divisor_exp.signum()
}

/// A value expressed in the unit of an SI prefix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledValue {
    pub mantissa: f64,
    pub prefix: SiPrefix,
    /// The requested tier was beyond yotta/yocto and got clamped
    pub clamped: bool,
}

impl ScaledValue {
    pub fn from_divisor_exponent(value: f64, divisor_exp: i32) -> Self {
        let tier = tier_for_divisor_exponent(divisor_exp);
        let prefix = SiPrefix::from_tier(tier);
        Self {
            mantissa: prefix.scale(value),
            prefix,
            clamped: tier.abs() > MAX_TIER,
        }
    }

    pub fn exponent(&self) -> i32 {
        self.prefix.exponent()
    }

    /// The unscaled value
    pub fn value(&self) -> f64 {
        self.prefix.unscale(self.mantissa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_prefix_table() {
        let symbols: Vec<&str> = SiPrefix::iter().map(|p| p.symbol()).collect();
        assert_eq!(
            symbols,
            vec![
                "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y"
            ]
        );
    }

    #[test]
    fn test_exponents_are_multiples_of_three() {
        for prefix in SiPrefix::iter() {
            let exp = prefix.exponent();
            assert_eq!(exp % 3, 0);
            assert!((-24..=24).contains(&exp));
            assert_eq!(SiPrefix::from_exponent(exp), Some(prefix));
        }
    }

    #[test]
    fn test_from_exponent_rejects_off_grid() {
        assert_eq!(SiPrefix::from_exponent(4), None);
        assert_eq!(SiPrefix::from_exponent(27), None);
        assert_eq!(SiPrefix::from_exponent(-27), None);
        assert_eq!(SiPrefix::from_exponent(-6), Some(SiPrefix::Micro));
    }

    #[test]
    fn test_from_tier_clamps() {
        assert_eq!(SiPrefix::from_tier(0), SiPrefix::Base);
        assert_eq!(SiPrefix::from_tier(1), SiPrefix::Kilo);
        assert_eq!(SiPrefix::from_tier(9), SiPrefix::Yotta);
        assert_eq!(SiPrefix::from_tier(-100), SiPrefix::Yocto);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(SiPrefix::from_str("k").unwrap(), SiPrefix::Kilo);
        assert_eq!(SiPrefix::from_str("M").unwrap(), SiPrefix::Mega);
        assert_eq!(SiPrefix::from_str("m").unwrap(), SiPrefix::Milli);
        assert_eq!(SiPrefix::from_str("µ").unwrap(), SiPrefix::Micro);
        assert_eq!(SiPrefix::from_str("u").unwrap(), SiPrefix::Micro);
        assert!(SiPrefix::from_str("K").is_err());
    }

    #[test]
    fn test_tier_for_divisor_exponent() {
        assert_eq!(tier_for_divisor_exponent(0), 0);
        assert_eq!(tier_for_divisor_exponent(1), 1);
        assert_eq!(tier_for_divisor_exponent(3), 1);
        assert_eq!(tier_for_divisor_exponent(4), 2);
        assert_eq!(tier_for_divisor_exponent(24), 8);
        assert_eq!(tier_for_divisor_exponent(25), 9);
        assert_eq!(tier_for_divisor_exponent(-1), -1);
        assert_eq!(tier_for_divisor_exponent(-3), -1);
        assert_eq!(tier_for_divisor_exponent(-4), -2);
        assert_eq!(tier_for_divisor_exponent(-24), -8);
    }

    #[test]
    fn test_scaled_value() {
        let scaled = ScaledValue::from_divisor_exponent(12_345.0, 2);
        assert_eq!(scaled.prefix, SiPrefix::Kilo);
        assert_eq!(scaled.exponent(), 3);
        assert!((scaled.mantissa - 12.345).abs() < 1e-12);
        assert!(!scaled.clamped);

        let micro = ScaledValue::from_divisor_exponent(0.00056, -5);
        assert_eq!(micro.prefix, SiPrefix::Micro);
        assert!((micro.mantissa - 560.0).abs() < 1e-9);
        assert!((micro.value() - 0.00056).abs() < 1e-15);
    }

    #[test]
    fn test_scaled_value_clamped() {
        let scaled = ScaledValue::from_divisor_exponent(1e30, 27);
        assert_eq!(scaled.prefix, SiPrefix::Yotta);
        assert!(scaled.clamped);
        assert!((scaled.mantissa - 1e6).abs() < 1e-3);
    }
}
