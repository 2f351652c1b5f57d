//! Character-class predicates over whole strings

/// Check whether a string consists entirely of CJK unified ideographs
///
/// Covers the base block U+4E00 to U+9FA5. Empty strings and strings with
/// any character outside the block (including whitespace and punctuation)
/// report false.
pub fn is_chinese(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

/// Check whether a string equals its own uppercase form
///
/// Caseless characters such as digits and punctuation do not disqualify a
/// string, so `"ABC123"` and `""` both report true.
pub fn is_upper_cased(value: &str) -> bool {
    value == value.to_uppercase()
}

/// Check whether a string equals its own lowercase form
pub fn is_lower_cased(value: &str) -> bool {
    value == value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_chinese() {
        assert!(is_chinese("中文"));
        assert!(is_chinese("你好世界"));

        assert!(!is_chinese(""));
        assert!(!is_chinese("中文abc"));
        assert!(!is_chinese("中 文")); // interior space
        assert!(!is_chinese("中文。")); // CJK punctuation falls outside the block
        assert!(!is_chinese("hello"));
    }

    #[test]
    fn test_is_upper_cased() {
        assert!(is_upper_cased("ABC"));
        assert!(is_upper_cased("ABC123"));
        assert!(is_upper_cased("HELLO, WORLD!"));
        assert!(is_upper_cased("")); // no caseless counterexample
        assert!(is_upper_cased("123"));

        assert!(!is_upper_cased("AbC"));
        assert!(!is_upper_cased("abc"));
    }

    #[test]
    fn test_is_lower_cased() {
        assert!(is_lower_cased("abc"));
        assert!(is_lower_cased("abc123"));
        assert!(is_lower_cased(""));

        assert!(!is_lower_cased("Abc"));
        assert!(!is_lower_cased("ABC"));
    }

    #[test]
    fn test_case_checks_handle_non_ascii() {
        assert!(is_upper_cased("ÉCOLE"));
        assert!(!is_upper_cased("école"));
        assert!(is_lower_cased("école"));
        // Caseless scripts satisfy both checks
        assert!(is_upper_cased("中文"));
        assert!(is_lower_cased("中文"));
    }
}
