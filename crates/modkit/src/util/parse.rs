use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Last path segment of `T`'s type name, without generic arguments
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Parse `text` into `T`, falling back to `T::default()`.
///
/// Returns the value and whether parsing succeeded. Failures are logged as
/// warnings tagged with the target type.
pub fn try_parse_enum<T>(text: &str) -> (T, bool)
where
    T: FromStr + Default,
    T::Err: Display,
{
    match text.parse::<T>() {
        Ok(value) => (value, true),
        Err(e) => {
            warn!(
                "[{}] failed to parse value '{}': {}",
                short_type_name::<T>(),
                text,
                e
            );
            (T::default(), false)
        }
    }
}
