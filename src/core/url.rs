//! URL path type for request routing.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, encode on output

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::fmt;
use std::sync::Arc;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode one path segment for use in an absolute URL.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Never ends with `/` except for the root path
/// - No query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from browser URL (strip query string and fragment, decode percent-encoding).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;

        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_decoded(&decoded)
    }

    /// Create from an already decoded path. Normalizes slashes.
    pub fn from_decoded(decoded: &str) -> Self {
        let segments: Vec<&str> = decoded
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return Self(Arc::from("/"));
        }

        Self(Arc::from(format!("/{}", segments.join("/"))))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Site-relative, percent-encoded form without the leading slash.
    ///
    /// `/café/a b` -> `caf%C3%A9/a%20b`
    pub fn to_encoded(&self) -> String {
        self.segments()
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_variants() {
        for url in ["/", "", "/?utm=x", "//"] {
            assert_eq!(UrlPath::from_browser(url).as_str(), "/");
        }
    }

    #[test]
    fn test_strips_trailing_slash_and_query() {
        assert_eq!(UrlPath::from_browser("/users/?page=2").as_str(), "/users");
        assert_eq!(UrlPath::from_browser("/about#team").as_str(), "/about");
    }

    #[test]
    fn test_collapses_duplicate_slashes() {
        assert_eq!(UrlPath::from_browser("//users///1/").as_str(), "/users/1");
    }

    #[test]
    fn test_decodes_percent_encoding() {
        assert_eq!(UrlPath::from_browser("/users/%31").as_str(), "/users/1");
        assert_eq!(UrlPath::from_browser("/caf%C3%A9").as_str(), "/café");
    }

    #[test]
    fn test_encoded_form_is_single_line() {
        let path = UrlPath::from_browser("/a%20b%0Ac/caf%C3%A9");
        assert_eq!(path.as_str(), "/a b\nc/café");
        assert_eq!(path.to_encoded(), "a%20b%0Ac/caf%C3%A9");
        assert_eq!(UrlPath::from_browser("/").to_encoded(), "");
        assert_eq!(encode_segment("100%/x?"), "100%25%2Fx%3F");
    }

    #[test]
    fn test_segments() {
        let path = UrlPath::from_browser("/users/42");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["users", "42"]);
        assert_eq!(UrlPath::from_browser("/").segments().count(), 0);
    }
}
