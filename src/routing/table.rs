//! Ordered route table.
//!
//! # Responsibilities
//! - Compile `(pattern, view)` registrations into an immutable table
//! - Fail fast on malformed registrations
//! - Build paths for named routes (reverse routing)
//!
//! # Design Decisions
//! - Registration order is match order; nothing is sorted
//! - A catch-all may only live in the last route
//! - Identical patterns are legal but the later one is logged as shadowed

use thiserror::Error;

use crate::config::RouteConfig;
use crate::routing::matcher::{PatternError, RoutePattern, Segment};
use crate::routing::params::Params;
use crate::routing::view::ViewId;

/// Registration-time errors. Any of these means the table is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("route #{index} `{pattern}`: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("route #{index} `{pattern}`: catch-all route must be registered last")]
    CatchAllNotLast { index: usize, pattern: String },

    #[error("route #{index}: name `{name}` is already used by route #{first}")]
    DuplicateName {
        index: usize,
        first: usize,
        name: String,
    },
}

/// Errors from [`RouteTable::href`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HrefError {
    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` needs parameter `{param}`")]
    MissingParam { route: String, param: String },

    #[error("route `{route}` cannot take an empty `{param}`")]
    EmptyParam { route: String, param: String },

    #[error("route `{route}` cannot take `{param}` containing '/'")]
    InvalidParam { route: String, param: String },
}

/// A single registration.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub view: ViewId,
    /// Optional unique name for reverse routing.
    pub name: Option<String>,
    /// Whether the view receives the path params as props.
    pub props: bool,
}

impl Route {
    pub fn new(pattern: RoutePattern, view: ViewId) -> Self {
        Self {
            pattern,
            view,
            name: None,
            props: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }
}

/// Immutable, ordered routes. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from `(pattern, view)` pairs in match order.
    pub fn new<I, S>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (S, ViewId)>,
        S: AsRef<str>,
    {
        let mut routes = Vec::new();
        for (index, (source, view)) in entries.into_iter().enumerate() {
            routes.push(Route::new(parse_pattern(index, source.as_ref())?, view));
        }
        Self::from_routes(routes)
    }

    /// Build a table from already-parsed routes.
    pub fn from_routes(routes: Vec<Route>) -> Result<Self, ConfigurationError> {
        if let Some(error) = check_routes(&routes).into_iter().next() {
            return Err(error);
        }
        warn_shadowed(&routes);

        tracing::info!(
            routes = routes.len(),
            fallback = routes.last().is_some_and(|r| r.pattern.has_catch_all()),
            "Route table built"
        );
        Ok(Self { routes })
    }

    /// Build a table from configuration entries.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, ConfigurationError> {
        let routes = configs
            .iter()
            .enumerate()
            .map(|(index, config)| config_route(index, config))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_routes(routes)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// True when the last route is a catch-all, making not-found unreachable.
    pub fn has_fallback(&self) -> bool {
        self.routes
            .last()
            .is_some_and(|route| route.pattern.has_catch_all())
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.name.as_deref() == Some(name))
    }

    /// Build the path of a named route, substituting its parameters.
    ///
    /// Named catch-alls take their value verbatim and may be empty;
    /// anonymous catch-alls contribute nothing.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, HrefError> {
        let route = self
            .by_name(name)
            .ok_or_else(|| HrefError::UnknownRoute(name.to_string()))?;

        let mut path = String::new();
        for segment in route.pattern.segments() {
            let piece = match segment {
                Segment::Literal(literal) => literal.as_str(),
                Segment::Param(param) => {
                    let value = params.get(param).ok_or_else(|| HrefError::MissingParam {
                        route: name.to_string(),
                        param: param.clone(),
                    })?;
                    if value.contains('/') {
                        return Err(HrefError::InvalidParam {
                            route: name.to_string(),
                            param: param.clone(),
                        });
                    }
                    if value.is_empty() {
                        return Err(HrefError::EmptyParam {
                            route: name.to_string(),
                            param: param.clone(),
                        });
                    }
                    value
                }
                Segment::CatchAll(Some(param)) => params.get(param).unwrap_or_default(),
                Segment::CatchAll(None) => "",
            };
            let piece = piece.trim_matches('/');
            if !piece.is_empty() {
                path.push('/');
                path.push_str(piece);
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

/// Run every registration check, collecting all failures.
///
/// Pattern syntax is checked when patterns are parsed, so this covers the
/// table-level rules only.
pub(crate) fn check_routes(routes: &[Route]) -> Vec<ConfigurationError> {
    let mut errors = Vec::new();
    let last = routes.len().saturating_sub(1);

    for (index, route) in routes.iter().enumerate() {
        if route.pattern.has_catch_all() && index != last {
            errors.push(ConfigurationError::CatchAllNotLast {
                index,
                pattern: route.pattern.as_str().to_string(),
            });
        }

        if let Some(name) = &route.name {
            let first = routes[..index]
                .iter()
                .position(|earlier| earlier.name.as_ref() == Some(name));
            if let Some(first) = first {
                errors.push(ConfigurationError::DuplicateName {
                    index,
                    first,
                    name: name.clone(),
                });
            }
        }
    }

    errors
}

pub(crate) fn parse_pattern(index: usize, source: &str) -> Result<RoutePattern, ConfigurationError> {
    RoutePattern::parse(source).map_err(|source_error| ConfigurationError::InvalidPattern {
        index,
        pattern: source.to_string(),
        source: source_error,
    })
}

pub(crate) fn config_route(index: usize, config: &RouteConfig) -> Result<Route, ConfigurationError> {
    Ok(Route {
        pattern: parse_pattern(index, &config.path)?,
        view: config.view,
        name: config.name.clone(),
        props: config.props,
    })
}

fn warn_shadowed(routes: &[Route]) {
    for (index, route) in routes.iter().enumerate() {
        if let Some(first) = routes[..index].iter().position(|r| r.pattern == route.pattern) {
            tracing::warn!(
                index,
                shadowed_by = first,
                pattern = %route.pattern,
                view = %route.view,
                "Route can never match: an identical pattern is registered earlier"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_routes() -> Vec<Route> {
        vec![
            Route::new(RoutePattern::parse("/").unwrap(), ViewId::Home).named("home"),
            Route::new(RoutePattern::parse("/job/:id").unwrap(), ViewId::JobPreview)
                .named("job-preview")
                .with_props(),
            Route::new(RoutePattern::parse("/files/:rest(.*)*").unwrap(), ViewId::NotFound)
                .named("files"),
        ]
    }

    #[test]
    fn test_new_keeps_order() {
        let table = RouteTable::new([("/jobs", ViewId::Jobs), ("/", ViewId::Home)]).unwrap();
        let views: Vec<_> = table.routes().iter().map(|r| r.view).collect();
        assert_eq!(views, vec![ViewId::Jobs, ViewId::Home]);
        assert!(!table.has_fallback());
    }

    #[test]
    fn test_invalid_pattern_reports_index() {
        let err = RouteTable::new([("/", ViewId::Home), ("/job/:id/:id", ViewId::JobPreview)])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidPattern {
                index: 1,
                pattern: "/job/:id/:id".into(),
                source: PatternError::DuplicateParam { name: "id".into() },
            }
        );
    }

    #[test]
    fn test_catch_all_must_be_last_route() {
        let err = RouteTable::new([("/(.*)", ViewId::NotFound), ("/jobs", ViewId::Jobs)])
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::CatchAllNotLast { index: 0, .. }));

        let table = RouteTable::new([("/jobs", ViewId::Jobs), ("/(.*)", ViewId::NotFound)]).unwrap();
        assert!(table.has_fallback());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let routes = vec![
            Route::new(RoutePattern::parse("/").unwrap(), ViewId::Home).named("home"),
            Route::new(RoutePattern::parse("/jobs").unwrap(), ViewId::Jobs).named("home"),
        ];
        let err = RouteTable::from_routes(routes).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicateName { index: 1, first: 0, name: "home".into() }
        );
    }

    #[test]
    fn test_check_routes_collects_everything() {
        let routes = vec![
            Route::new(RoutePattern::parse("/*").unwrap(), ViewId::NotFound).named("x"),
            Route::new(RoutePattern::parse("/jobs").unwrap(), ViewId::Jobs).named("x"),
        ];
        assert_eq!(check_routes(&routes).len(), 2);
    }

    #[test]
    fn test_href() {
        let table = RouteTable::from_routes(job_routes()).unwrap();
        let params: Params = [("id", "42")].into_iter().collect();

        assert_eq!(table.href("home", &Params::new()).unwrap(), "/");
        assert_eq!(table.href("job-preview", &params).unwrap(), "/job/42");
        assert_eq!(
            table.href("job-preview", &Params::new()).unwrap_err(),
            HrefError::MissingParam { route: "job-preview".into(), param: "id".into() }
        );
        assert_eq!(
            table.href("job-preview", &[("id", "")].into_iter().collect()).unwrap_err(),
            HrefError::EmptyParam { route: "job-preview".into(), param: "id".into() }
        );
        assert_eq!(
            table.href("nope", &params).unwrap_err(),
            HrefError::UnknownRoute("nope".into())
        );

        assert_eq!(
            table.href("job-preview", &[("id", "a/b")].into_iter().collect()).unwrap_err(),
            HrefError::InvalidParam { route: "job-preview".into(), param: "id".into() }
        );
        assert_eq!(
            table.href("job-preview", &[("id", "/")].into_iter().collect()).unwrap_err(),
            HrefError::InvalidParam { route: "job-preview".into(), param: "id".into() }
        );

        let rest: Params = [("rest", "a/b")].into_iter().collect();
        assert_eq!(table.href("files", &rest).unwrap(), "/files/a/b");
        assert_eq!(table.href("files", &Params::new()).unwrap(), "/files");
        let slash: Params = [("rest", "/")].into_iter().collect();
        assert_eq!(table.href("files", &slash).unwrap(), "/files");
    }

    #[test]
    fn test_route_metadata() {
        let table = RouteTable::from_routes(job_routes()).unwrap();
        let preview = table.by_name("job-preview").unwrap();
        assert!(preview.props);
        assert_eq!(preview.view, ViewId::JobPreview);
        assert!(!table.by_name("home").unwrap().props);
    }
}
