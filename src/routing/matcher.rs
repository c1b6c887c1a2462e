//! Route pattern parsing and structural matching.
//!
//! # Responsibilities
//! - Parse pattern strings (`/job/:id`, `/(.*)`) into segment templates
//! - Reject malformed patterns at registration time
//! - Match a split path against a template, binding parameters
//!
//! # Design Decisions
//! - Matching is case-sensitive and works on already-decoded segments
//! - A parameter never binds an empty segment
//! - A catch-all is always the final segment and swallows the rest
//! - No regex: `(.*)` is the only parenthesised form understood

use std::fmt;

use thiserror::Error;

use crate::routing::params::Params;

/// Syntax errors in a single pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must start with '/'")]
    MissingLeadingSlash,

    #[error("parameter at segment {position} has an empty name")]
    EmptyParamName { position: usize },

    #[error("invalid parameter name `{name}` (expected letters, digits or '_')")]
    InvalidParamName { name: String },

    #[error("parameter `{name}` is declared more than once")]
    DuplicateParam { name: String },

    #[error("catch-all at segment {position} must be the final segment")]
    CatchAllNotTerminal { position: usize },

    #[error("segment {position} is empty")]
    EmptySegment { position: usize },

    #[error("unsupported segment syntax `{segment}`")]
    UnsupportedSyntax { segment: String },
}

/// One element of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
    /// Matches the remaining suffix. A name binds the suffix joined by `/`.
    CatchAll(Option<String>),
}

/// A parsed, immutable route template.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for RoutePattern {}

impl RoutePattern {
    /// Parse a pattern string.
    ///
    /// Accepted forms per segment: plain text literals, `:name` parameters,
    /// and the catch-alls `*`, `(.*)`, `(.*)*`, `:name(.*)`, `:name(.*)*`.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        if !source.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash);
        }

        let raw = split_segments(source);
        let mut segments: Vec<Segment> = Vec::with_capacity(raw.len());
        let mut names: Vec<String> = Vec::new();

        for (position, text) in raw.iter().enumerate() {
            if let Some(Segment::CatchAll(_)) = segments.last() {
                return Err(PatternError::CatchAllNotTerminal { position: position - 1 });
            }

            let segment = parse_segment(text, position)?;
            if let Segment::Param(name) | Segment::CatchAll(Some(name)) = &segment {
                if names.contains(name) {
                    return Err(PatternError::DuplicateParam { name: name.clone() });
                }
                names.push(name.clone());
            }
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The string this pattern was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Names of all binding segments, in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) | Segment::CatchAll(Some(name)) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Match already-split path segments, returning the bindings on success.
    pub fn matches(&self, path: &[&str]) -> Option<Params> {
        let mut params = Params::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(literal) => {
                    if path.get(i) != Some(&literal.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(i).filter(|value| !value.is_empty())?;
                    params.push(name.as_str(), *value);
                }
                Segment::CatchAll(name) => {
                    if let Some(name) = name {
                        let rest = path.get(i..).unwrap_or_default();
                        params.push(name.as_str(), rest.join("/"));
                    }
                    return Some(params);
                }
            }
        }

        (path.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => write!(f, "/{literal}")?,
                Segment::Param(name) => write!(f, "/:{name}")?,
                Segment::CatchAll(None) => f.write_str("/(.*)")?,
                Segment::CatchAll(Some(name)) => write!(f, "/:{name}(.*)*")?,
            }
        }
        Ok(())
    }
}

/// Split a path on `/`, dropping empty leading and trailing segments.
///
/// Inner empty segments survive so `/job//42` stays three segments long.
pub fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

const CATCH_ALL_SUFFIXES: [&str; 2] = ["(.*)*", "(.*)"];

fn parse_segment(text: &str, position: usize) -> Result<Segment, PatternError> {
    if text.is_empty() {
        return Err(PatternError::EmptySegment { position });
    }
    if matches!(text, "*" | "(.*)" | "(.*)*") {
        return Ok(Segment::CatchAll(None));
    }

    if let Some(rest) = text.strip_prefix(':') {
        let (name, catch_all) = match CATCH_ALL_SUFFIXES
            .iter()
            .find_map(|suffix| rest.strip_suffix(suffix))
        {
            Some(name) => (name, true),
            None => (rest, false),
        };

        if name.is_empty() {
            return Err(PatternError::EmptyParamName { position });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PatternError::InvalidParamName {
                name: name.to_string(),
            });
        }

        return Ok(if catch_all {
            Segment::CatchAll(Some(name.to_string()))
        } else {
            Segment::Param(name.to_string())
        });
    }

    if text.contains(['*', '(', ')']) {
        return Err(PatternError::UnsupportedSyntax {
            segment: text.to_string(),
        });
    }

    Ok(Segment::Literal(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(pattern: &str, path: &str) -> Option<Params> {
        RoutePattern::parse(pattern)
            .unwrap()
            .matches(&split_segments(path))
    }

    #[test]
    fn test_split_segments() {
        assert!(split_segments("/").is_empty());
        assert_eq!(split_segments("/jobs/"), vec!["jobs"]);
        assert_eq!(split_segments("/job//42"), vec!["job", "", "42"]);
    }

    #[test]
    fn test_literal_matcher() {
        assert_eq!(matched("/jobs", "/jobs"), Some(Params::new()));
        assert_eq!(matched("/jobs", "/Jobs"), None); // Case sensitive
        assert_eq!(matched("/jobs", "/jobs/1"), None);
        assert_eq!(matched("/", "/"), Some(Params::new()));
        assert_eq!(matched("/", "/jobs"), None);
    }

    #[test]
    fn test_param_matcher() {
        let params = matched("/job/:id", "/job/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));

        assert_eq!(matched("/job/:id", "/job/"), None);
        assert_eq!(matched("/job/:id", "/job"), None);
        assert_eq!(matched("/job/:id/edit", "/job//edit"), None);
    }

    #[test]
    fn test_catch_all_matcher() {
        assert_eq!(matched("/*", "/"), Some(Params::new()));
        assert_eq!(matched("/(.*)", "/a/b/c"), Some(Params::new()));

        let params = matched("/docs/:rest(.*)*", "/docs/a/b").unwrap();
        assert_eq!(params.get("rest"), Some("a/b"));

        let params = matched("/docs/:rest(.*)*", "/docs").unwrap();
        assert_eq!(params.get("rest"), Some(""));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            RoutePattern::parse("jobs").unwrap_err(),
            PatternError::MissingLeadingSlash
        );
        assert_eq!(
            RoutePattern::parse("/job/:").unwrap_err(),
            PatternError::EmptyParamName { position: 1 }
        );
        assert_eq!(
            RoutePattern::parse("/job/:id-x").unwrap_err(),
            PatternError::InvalidParamName { name: "id-x".into() }
        );
        assert_eq!(
            RoutePattern::parse("/:id/x/:id").unwrap_err(),
            PatternError::DuplicateParam { name: "id".into() }
        );
        assert_eq!(
            RoutePattern::parse("/:id/:id(.*)*").unwrap_err(),
            PatternError::DuplicateParam { name: "id".into() }
        );
        assert_eq!(
            RoutePattern::parse("/(.*)/jobs").unwrap_err(),
            PatternError::CatchAllNotTerminal { position: 0 }
        );
        assert_eq!(
            RoutePattern::parse("/job//:id").unwrap_err(),
            PatternError::EmptySegment { position: 1 }
        );
        assert_eq!(
            RoutePattern::parse("/job/(\\d+)").unwrap_err(),
            PatternError::UnsupportedSyntax { segment: "(\\d+)".into() }
        );
    }

    #[test]
    fn test_display_is_canonical() {
        let pattern = RoutePattern::parse("/job/:id/").unwrap();
        assert_eq!(pattern.to_string(), "/job/:id");
        assert_eq!(pattern.as_str(), "/job/:id/");
        assert_eq!(RoutePattern::parse("/*").unwrap().to_string(), "/(.*)");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            RoutePattern::parse("/job/:id").unwrap(),
            RoutePattern::parse("/job/:id/").unwrap()
        );
        assert_ne!(
            RoutePattern::parse("/job/:id").unwrap(),
            RoutePattern::parse("/job/:slug").unwrap()
        );
    }
}
