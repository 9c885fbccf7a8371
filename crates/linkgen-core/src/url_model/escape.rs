//! Escaping helpers for query values and path segments.

use percent_encoding::percent_decode_str;
use url::form_urlencoded;

/// Escapes `value` for use as a single query parameter value.
///
/// Uses application/x-www-form-urlencoded rules: ASCII alphanumerics and
/// `*-._` pass through, space becomes `+`, everything else (including
/// `/ ? # & = +` and all non-ASCII bytes) is percent-escaped.
pub fn query_escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Inverse of [`query_escape`]: `+` becomes space, then percent escapes are
/// decoded. Every other byte, `&` and `=` included, is kept as is. Invalid
/// UTF-8 sequences are replaced.
pub fn query_unescape(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Replaces every `/` with `-` so nested names (`org/sub`) collapse into one
/// path segment. Lossy: `a/b` and `a-b` map to the same segment.
pub fn flatten_slashes(name: &str) -> String {
    name.replace('/', "-")
}

/// Percent-escapes a single path segment. `/` is escaped too.
pub fn escape_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_escape_reserved() {
        assert_eq!(query_escape("my/lock#1"), "my%2Flock%231");
        assert_eq!(query_escape("a?b&c=d+e"), "a%3Fb%26c%3Dd%2Be");
        assert_eq!(query_escape("with space"), "with+space");
        assert_eq!(query_escape("plain-id_1.2"), "plain-id_1.2");
    }

    #[test]
    fn query_escape_non_ascii() {
        assert_eq!(query_escape("é"), "%C3%A9");
    }

    #[test]
    fn query_unescape_reverses() {
        for raw in ["my/lock#1", "a b+c", "owner/repo/./default", "ключ&x=1", ""] {
            assert_eq!(query_unescape(&query_escape(raw)), raw);
        }
    }

    #[test]
    fn query_unescape_keeps_raw_separators() {
        assert_eq!(query_unescape("a&b"), "a&b");
        assert_eq!(query_unescape("x%26y&z"), "x&y&z");
        assert_eq!(query_unescape("k=v"), "k=v");
        assert_eq!(query_unescape("a+b%2Bc"), "a b+c");
    }

    #[test]
    fn flatten() {
        assert_eq!(flatten_slashes("org/sub"), "org-sub");
        assert_eq!(flatten_slashes("a/b/c"), "a-b-c");
        assert_eq!(flatten_slashes("plain"), "plain");
    }

    #[test]
    fn path_segment() {
        assert_eq!(escape_path_segment("prod"), "prod");
        assert_eq!(escape_path_segment("a b"), "a%20b");
        assert_eq!(escape_path_segment("x/y"), "x%2Fy");
    }
}
