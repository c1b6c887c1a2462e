//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::ViewId;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, in match order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    /// The job board's route table.
    fn default() -> Self {
        Self {
            routes: vec![
                RouteConfig::new("/", ViewId::Home).named("home"),
                RouteConfig::new("/jobs", ViewId::Jobs).named("jobs"),
                RouteConfig::new("/add-job", ViewId::AddJob).named("add-job"),
                RouteConfig::new("/job/:id", ViewId::JobPreview)
                    .named("job-preview")
                    .with_props(),
                RouteConfig::new("/edit-job/:id", ViewId::EditJob)
                    .named("edit-job")
                    .with_props(),
                RouteConfig::new("/(.*)", ViewId::NotFound).named("not-found"),
            ],
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One route: a path pattern bound to a view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Pattern string (`/job/:id`, `/(.*)`).
    pub path: String,

    /// View shown when the pattern matches.
    pub view: ViewId,

    /// Optional unique name for reverse routing.
    #[serde(default)]
    pub name: Option<String>,

    /// Pass path params to the view as props.
    #[serde(default)]
    pub props: bool,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
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

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: RouterConfig = toml::from_str(
            r#"
            [[routes]]
            path = "/jobs"
            view = "jobs"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes, vec![RouteConfig::new("/jobs", ViewId::Jobs)]);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_unknown_view_is_a_parse_error() {
        let result: Result<RouterConfig, _> = toml::from_str(
            r#"
            [[routes]]
            path = "/"
            view = "dashboard"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_ends_with_fallback() {
        let config = RouterConfig::default();
        assert_eq!(config.routes.len(), 6);
        assert_eq!(config.routes.last().map(|r| r.view), Some(ViewId::NotFound));
    }
}
