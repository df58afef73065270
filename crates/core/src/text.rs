//! Small string helpers shared by the mapper components.

/// Truncate `value` to at most `max_size` characters.
///
/// Destination systems cap the length of several work-item fields (titles,
/// tags), so mappers crop computed values before submission. The limit is
/// counted in `char`s rather than bytes, so multi-byte input never splits a
/// UTF-8 boundary. Returns the whole string when it already fits.
pub fn crop(value: &str, max_size: usize) -> &str {
    match value.char_indices().nth(max_size) {
        Some((boundary, _)) => &value[..boundary],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_longer_than_limit() {
        assert_eq!(crop("hello", 3), "hel");
    }

    #[test]
    fn test_crop_shorter_than_limit() {
        assert_eq!(crop("hi", 10), "hi");
    }

    #[test]
    fn test_crop_exact_length() {
        assert_eq!(crop("hello", 5), "hello");
    }

    #[test]
    fn test_crop_to_zero() {
        assert_eq!(crop("hello", 0), "");
    }

    #[test]
    fn test_crop_empty_input() {
        assert_eq!(crop("", 4), "");
    }

    #[test]
    fn test_crop_counts_characters_not_bytes() {
        assert_eq!(crop("日本語テスト", 2), "日本");
        assert_eq!(crop("héllo", 2), "hé");
    }
}
