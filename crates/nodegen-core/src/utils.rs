/// Returns true when the slice is present and holds at least one element.
///
/// `None` stands in for a slice that was never set.
pub fn is_non_empty<T>(values: Option<&[T]>) -> bool {
    values.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_non_empty() {
        let populated = [1, 2, 3];
        let empty: [i32; 0] = [];

        assert!(is_non_empty(Some(&populated[..])));
        assert!(!is_non_empty(Some(&empty[..])));
        assert!(!is_non_empty::<i32>(None));
    }
}
