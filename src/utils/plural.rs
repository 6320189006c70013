//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 urls)
/// - `plural_s(1)` -> `""` (1 url)
/// - `plural_s(5)` -> `"s"` (5 urls)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "url")` -> `"0 urls"`
/// - `plural_count(1, "url")` -> `"1 url"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "url"), "0 urls");
        assert_eq!(plural_count(1, "url"), "1 url");
        assert_eq!(plural_count(7, "user"), "7 users");
    }
}
