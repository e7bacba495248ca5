//! Pattern matching for the `Like` query operator.
//!
//! SQL LIKE with two wildcards:
//! - `%` matches zero or more characters
//! - `_` matches exactly one character
//!
//! Matching is **case-sensitive** and operates on Unicode scalar values.

use alloc::vec::Vec;

/// SQL LIKE pattern matching.
///
/// ```
/// use sylph_core::pattern_match::like;
/// assert!(like("hello", "h%o"));
/// assert!(like("hello", "_ello"));
/// assert!(like("a@x.com", "%@x%"));
/// assert!(!like("hello", "world"));
/// ```
pub fn like(value: &str, pattern: &str) -> bool {
    let v: Vec<char> = value.chars().collect();
    let p: Vec<char> = pattern.chars().collect();

    let (mut vi, mut pi) = (0, 0);
    // Last `%` seen and the value position it is currently stretched to.
    let mut star: Option<(usize, usize)> = None;

    while vi < v.len() {
        if pi < p.len() && (p[pi] == '_' || (p[pi] != '%' && p[pi] == v[vi])) {
            vi += 1;
            pi += 1;
        } else if pi < p.len() && p[pi] == '%' {
            star = Some((pi, vi));
            pi += 1;
        } else if let Some((sp, sv)) = star {
            pi = sp + 1;
            vi = sv + 1;
            star = Some((sp, sv + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '%')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_exact() {
        assert!(like("abc", "abc"));
        assert!(!like("abc", "abd"));
        assert!(!like("abc", "ab"));
    }

    #[test]
    fn test_like_percent() {
        assert!(like("", "%"));
        assert!(like("anything", "%"));
        assert!(like("prefix_rest", "prefix%"));
        assert!(like("rest_suffix", "%suffix"));
        assert!(like("a-middle-b", "%middle%"));
        assert!(like("abc", "a%%c"));
        assert!(!like("abc", "%d%"));
    }

    #[test]
    fn test_like_underscore() {
        assert!(like("cat", "c_t"));
        assert!(!like("ct", "c_t"));
        assert!(like("cart", "c__t"));
    }

    #[test]
    fn test_like_case_sensitive() {
        assert!(!like("Ann", "ann"));
        assert!(like("Ann", "A%"));
    }

    #[test]
    fn test_like_unicode() {
        assert!(like("héllo", "h_llo"));
        assert!(like("日本語", "日%"));
    }

    #[test]
    fn test_like_many_wildcards() {
        let value = "a".repeat(200);
        let pattern = "%a".repeat(40) + "%b";
        assert!(!like(&value, &pattern));
        assert!(like(&value, &("%a".repeat(40) + "%")));
        assert!(like("xaybz", "%a%b%"));
        assert!(!like("xaybz", "%b%a%"));
    }
}
