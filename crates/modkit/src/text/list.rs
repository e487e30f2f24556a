use std::fmt::Display;

/// Delimiter used when none is given
pub const DEFAULT_DELIMITER: &str = ", ";

/// Join items with `delimiter` using their `Display` impls
pub fn sprint<I>(items: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.push_str(delimiter);
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Join items with `delimiter`, rendering each with `render`
pub fn sprint_with<I, F>(items: I, delimiter: &str, mut render: F) -> String
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> String,
{
    let mut out = String::new();
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.push_str(delimiter);
        }
        out.push_str(&render(&item));
    }
    out
}

/// Join optional items, writing `null` for missing ones
pub fn sprint_nullable<T: Display>(items: &[Option<T>], delimiter: &str) -> String {
    sprint_with(items, delimiter, |item| match item {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    })
}
