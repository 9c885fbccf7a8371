//! Route template parsing and expansion.
//!
//! Grammar: `path[?key=value(&key=value)*]`. Path text and query values may
//! hold `{name}` or `{name:pattern}` placeholders. Query keys are literal.

use regex::Regex;

use super::RouteError;

/// Default pattern for path placeholders: one segment.
const DEFAULT_PATH_PATTERN: &str = "[^/]+";
/// Default pattern for query placeholders: anything.
const DEFAULT_QUERY_PATTERN: &str = ".*";

#[derive(Debug, Clone)]
enum Piece {
    Literal(String),
    /// Index into `Template::vars`.
    Var(usize),
}

#[derive(Debug, Clone)]
struct QueryPair {
    key: String,
    value: Vec<Piece>,
}

#[derive(Debug, Clone)]
struct Var {
    name: String,
    pattern: String,
    matcher: Regex,
}

#[derive(Debug, Clone)]
pub(crate) struct Template {
    raw: String,
    path: Vec<Piece>,
    query: Vec<QueryPair>,
    vars: Vec<Var>,
}

impl Template {
    pub(crate) fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidTemplate {
            template: raw.to_string(),
            reason: reason.to_string(),
        };

        let (path_text, query_text) = match split_query(raw) {
            Some((p, q)) => (p, Some(q)),
            None => (raw, None),
        };
        if !path_text.starts_with('/') {
            return Err(invalid("path must start with '/'"));
        }

        let mut vars = Vec::new();
        let path = parse_pieces(raw, path_text, false, &mut vars)?;

        let mut query = Vec::new();
        if let Some(query_text) = query_text {
            for pair in split_top_level(query_text, '&').into_iter().filter(|p| !p.is_empty()) {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                if key.is_empty() {
                    return Err(invalid("empty query key"));
                }
                if key.contains(['{', '}']) {
                    return Err(invalid("query keys cannot hold placeholders"));
                }
                let value = parse_pieces(raw, value, true, &mut vars)?;
                query.push(QueryPair {
                    key: key.to_string(),
                    value,
                });
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            path,
            query,
            vars,
        })
    }

    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    /// Variable names in declaration order.
    pub(crate) fn var_names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|v| v.name.as_str())
    }

    /// Expands the template. Path values are escaped per segment; query
    /// values are inserted as supplied.
    pub(crate) fn expand(&self, route: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        if let Some((name, _)) = params
            .iter()
            .find(|(name, _)| !self.vars.iter().any(|v| v.name == *name))
        {
            return Err(RouteError::UnexpectedParam {
                route: route.to_string(),
                name: name.to_string(),
            });
        }

        let mut values = Vec::with_capacity(self.vars.len());
        for var in &self.vars {
            let value = params
                .iter()
                .find(|(name, _)| *name == var.name)
                .map(|(_, value)| *value)
                .ok_or_else(|| RouteError::MissingParam {
                    route: route.to_string(),
                    name: var.name.clone(),
                })?;
            if !var.matcher.is_match(value) {
                return Err(RouteError::PatternMismatch {
                    route: route.to_string(),
                    name: var.name.clone(),
                    value: value.to_string(),
                    pattern: var.pattern.clone(),
                });
            }
            values.push(value);
        }

        let mut out = String::new();
        for piece in &self.path {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Var(i) => out.push_str(&escape_path_value(values[*i])),
            }
        }
        for (n, pair) in self.query.iter().enumerate() {
            out.push(if n == 0 { '?' } else { '&' });
            out.push_str(&pair.key);
            out.push('=');
            for piece in &pair.value {
                match piece {
                    Piece::Literal(text) => out.push_str(text),
                    Piece::Var(i) => out.push_str(values[*i]),
                }
            }
        }
        Ok(out)
    }
}

/// Splits at the first `?` outside a placeholder.
fn split_query(raw: &str) -> Option<(&str, &str)> {
    let path = split_top_level(raw, '?').into_iter().next()?;
    raw.get(path.len() + 1..).map(|query| (path, query))
}

/// Splits `text` on `sep`, ignoring separators inside `{...}`.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn parse_pieces(
    raw: &str,
    text: &str,
    in_query: bool,
    vars: &mut Vec<Var>,
) -> Result<Vec<Piece>, RouteError> {
    let invalid = |reason: String| RouteError::InvalidTemplate {
        template: raw.to_string(),
        reason,
    };

    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = text.char_indices();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' => {
                // Braces nest so patterns like `[0-9]{4}` survive.
                let mut depth = 1usize;
                let mut end = None;
                for (i, c) in chars.by_ref() {
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                end = Some(i);
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                let end = end.ok_or_else(|| invalid("unclosed '{'".to_string()))?;
                let body = &text[start + 1..end];
                let (name, pattern) = match body.split_once(':') {
                    Some((name, pattern)) => (name, pattern),
                    None if in_query => (body, DEFAULT_QUERY_PATTERN),
                    None => (body, DEFAULT_PATH_PATTERN),
                };
                if name.is_empty() {
                    return Err(invalid("empty placeholder name".to_string()));
                }
                if vars.iter().any(|v| v.name == name) {
                    return Err(invalid(format!("placeholder {{{name}}} declared twice")));
                }
                let matcher =
                    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| RouteError::InvalidPattern {
                        name: name.to_string(),
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })?;

                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(Piece::Var(vars.len()));
                vars.push(Var {
                    name: name.to_string(),
                    pattern: pattern.to_string(),
                    matcher,
                });
            }
            '}' => return Err(invalid("unmatched '}'".to_string())),
            c => literal.push(c),
        }
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

/// Escapes each `/`-separated part of a path value, keeping the slashes the
/// placeholder's pattern allowed.
fn escape_path_value(value: &str) -> String {
    value
        .split('/')
        .map(crate::url_model::escape_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOBS: &str = "/jobs/{org}/{repo}/{pull}/{project}/{workspace}";

    #[test]
    fn parses_path_and_query_vars() {
        let t = Template::parse("/lock?id={id}").unwrap();
        assert_eq!(t.var_names().collect::<Vec<_>>(), vec!["id"]);
        let t = Template::parse(JOBS).unwrap();
        assert_eq!(
            t.var_names().collect::<Vec<_>>(),
            vec!["org", "repo", "pull", "project", "workspace"]
        );
        assert_eq!(t.raw(), JOBS);
    }

    #[test]
    fn expands_query_value_verbatim() {
        let t = Template::parse("/lock?id={id}").unwrap();
        assert_eq!(
            t.expand("lock", &[("id", "my%2Flock%231")]).unwrap(),
            "/lock?id=my%2Flock%231"
        );
    }

    #[test]
    fn expands_path_with_escaping() {
        let t = Template::parse(JOBS).unwrap();
        let path = t
            .expand(
                "jobs",
                &[
                    ("workspace", "my ws"),
                    ("org", "acme"),
                    ("repo", "infra"),
                    ("pull", "3"),
                    ("project", "app"),
                ],
            )
            .unwrap();
        assert_eq!(path, "/jobs/acme/infra/3/app/my%20ws");
    }

    #[test]
    fn default_path_pattern_rejects_slash() {
        let t = Template::parse("/p/{name}").unwrap();
        let err = t.expand("p", &[("name", "a/b")]).unwrap_err();
        assert!(matches!(err, RouteError::PatternMismatch { ref name, .. } if name == "name"));
    }

    #[test]
    fn custom_pattern_allows_slash_and_keeps_it() {
        let t = Template::parse("/p/{rest:.+}").unwrap();
        assert_eq!(t.expand("p", &[("rest", "./a b/c")]).unwrap(), "/p/./a%20b/c");
    }

    #[test]
    fn pattern_with_braces() {
        let t = Template::parse("/y/{year:[0-9]{4}}").unwrap();
        assert_eq!(t.expand("y", &[("year", "2024")]).unwrap(), "/y/2024");
        assert!(t.expand("y", &[("year", "24")]).is_err());
    }

    #[test]
    fn missing_and_unexpected_params() {
        let t = Template::parse("/lock?id={id}").unwrap();
        assert_eq!(
            t.expand("lock", &[]).unwrap_err(),
            RouteError::MissingParam {
                route: "lock".to_string(),
                name: "id".to_string()
            }
        );
        assert_eq!(
            t.expand("lock", &[("id", "x"), ("other", "y")]).unwrap_err(),
            RouteError::UnexpectedParam {
                route: "lock".to_string(),
                name: "other".to_string()
            }
        );
    }

    #[test]
    fn literal_query_pairs() {
        let t = Template::parse("/view?tab=logs&id={id}").unwrap();
        assert_eq!(t.expand("v", &[("id", "7")]).unwrap(), "/view?tab=logs&id=7");
    }

    #[test]
    fn query_pattern_may_hold_separators() {
        let t = Template::parse("/l?id={id:a&b}&tab=x").unwrap();
        assert_eq!(t.var_names().collect::<Vec<_>>(), vec!["id"]);
        assert_eq!(t.expand("l", &[("id", "a&b")]).unwrap(), "/l?id=a&b&tab=x");
        assert!(t.expand("l", &[("id", "ab")]).is_err());
    }

    #[test]
    fn rejects_malformed_templates() {
        for bad in ["lock", "/a/{", "/a/}", "/a/{}", "/a/{x}/{x}", "/a?={x}", "/a?{k}=1"] {
            assert!(
                matches!(Template::parse(bad), Err(RouteError::InvalidTemplate { .. })),
                "{bad} should be rejected"
            );
        }
        assert!(matches!(
            Template::parse("/a/{x:(}"),
            Err(RouteError::InvalidPattern { .. })
        ));
    }
}
