//! Externally reachable base URL (scheme + host, optional port and base path).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum BaseUrlError {
    #[error("invalid base URL {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL {0:?} must use http or https")]
    Scheme(String),
    #[error("base URL {0:?} has no host")]
    MissingHost(String),
    #[error("base URL {0:?} must not carry a query or fragment")]
    QueryOrFragment(String),
}

/// Base URL that generated links are appended to.
///
/// Rendered without a trailing `/`, so a route path such as `/lock?id=x` can be
/// concatenated directly. The `url` crate always renders an empty path as `/`;
/// that slash (and a trailing slash on a base path) is dropped here once, at
/// construction, instead of at every concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    rendered: String,
}

impl BaseUrl {
    pub fn parse(input: &str) -> Result<Self, BaseUrlError> {
        let url = Url::parse(input.trim()).map_err(|source| BaseUrlError::Parse {
            input: input.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BaseUrlError::Scheme(input.to_string()));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(BaseUrlError::MissingHost(input.to_string()));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(BaseUrlError::QueryOrFragment(input.to_string()));
        }

        let raw = url.as_str();
        let rendered = raw.strip_suffix('/').unwrap_or(raw).to_string();
        Ok(Self { rendered })
    }

    /// String form used as the link prefix.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Base URL followed directly by `path`. No separator handling: `path` is
    /// expected to start with `/` (or be empty).
    pub fn join_path(&self, path: &str) -> String {
        let mut out = String::with_capacity(self.rendered.len() + path.len());
        out.push_str(&self.rendered);
        out.push_str(path);
        out
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl FromStr for BaseUrl {
    type Err = BaseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_only_has_no_trailing_slash() {
        let base = BaseUrl::parse("https://atlantis.example.com").unwrap();
        assert_eq!(base.as_str(), "https://atlantis.example.com");
        let base = BaseUrl::parse("https://atlantis.example.com/").unwrap();
        assert_eq!(base.as_str(), "https://atlantis.example.com");
    }

    #[test]
    fn keeps_port_and_base_path() {
        let base = BaseUrl::parse("http://localhost:4141").unwrap();
        assert_eq!(base.as_str(), "http://localhost:4141");
        let base = BaseUrl::parse("https://ci.example.com/atlantis/").unwrap();
        assert_eq!(base.as_str(), "https://ci.example.com/atlantis");
        assert_eq!(base.join_path("/lock"), "https://ci.example.com/atlantis/lock");
    }

    #[test]
    fn drops_only_one_trailing_slash() {
        let base = BaseUrl::parse("https://h/a//").unwrap();
        assert_eq!(base.as_str(), "https://h/a/");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            BaseUrl::parse("not a url"),
            Err(BaseUrlError::Parse { .. })
        ));
        assert!(matches!(
            BaseUrl::parse("ftp://example.com"),
            Err(BaseUrlError::Scheme(_))
        ));
        assert!(matches!(
            BaseUrl::parse("https://example.com/?a=b"),
            Err(BaseUrlError::QueryOrFragment(_))
        ));
        assert!(matches!(
            BaseUrl::parse("https://example.com/#top"),
            Err(BaseUrlError::QueryOrFragment(_))
        ));
    }

    #[test]
    fn from_str_and_display() {
        let base: BaseUrl = "https://example.com".parse().unwrap();
        assert_eq!(base.to_string(), "https://example.com");
    }
}
