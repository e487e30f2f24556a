use crate::error::{Error, Result};

/// Smallest of `values`; needs at least two of them
pub fn min_of<T: PartialOrd + Clone>(values: &[T]) -> Result<T> {
    let [first, rest @ ..] = values else {
        return Err(Error::InvalidArgument(
            "min_of needs at least two values, got none".to_string(),
        ));
    };
    if rest.is_empty() {
        return Err(Error::InvalidArgument(
            "min_of needs at least two values, got one".to_string(),
        ));
    }

    let mut min = first;
    for value in rest {
        if value < min {
            min = value;
        }
    }
    Ok(min.clone())
}

/// Assign `value` only when `target` still holds its default.
///
/// Returns whether the assignment happened.
pub fn set_if_default<T: Default + PartialEq>(target: &mut T, value: T) -> bool {
    if *target == T::default() {
        *target = value;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_of() {
        assert_eq!(min_of(&[3, 1, 2]).unwrap(), 1);
        assert_eq!(min_of(&[2.5, -0.5]).unwrap(), -0.5);
        assert_eq!(min_of(&["b", "a", "c"]).unwrap(), "a");
    }

    #[test]
    fn test_min_of_needs_two_values() {
        let empty: [i32; 0] = [];
        assert!(matches!(min_of(&empty), Err(Error::InvalidArgument(_))));
        assert!(matches!(min_of(&[7]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_set_if_default() {
        let mut name = String::new();
        assert!(set_if_default(&mut name, "probe".to_string()));
        assert!(!set_if_default(&mut name, "tank".to_string()));
        assert_eq!(name, "probe");

        let mut count = 4u32;
        assert!(!set_if_default(&mut count, 9));
        assert_eq!(count, 4);
    }
}
