//! Route lookup.
//!
//! # Responsibilities
//! - Hold the compiled route table
//! - Resolve a path to the first matching route
//! - Return the matched view or an explicit not-found
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(routes × segments) linear scan, acceptable for SPA-sized tables
//! - Explicit NotFound rather than silent default

use std::sync::Arc;

use serde::Serialize;

use crate::observability::metrics;
use crate::routing::matcher::split_segments;
use crate::routing::params::Params;
use crate::routing::table::{HrefError, RouteTable};
use crate::routing::view::ViewId;

/// Details of a successful match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub view: ViewId,
    pub params: Params,
    /// Position of the matching route in the table.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub props: bool,
}

/// Outcome of resolving one path. Exactly one is produced per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Matched(RouteMatch),
    NotFound { requested_path: String },
}

impl Resolution {
    pub fn view(&self) -> Option<ViewId> {
        match self {
            Resolution::Matched(m) => Some(m.view),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Resolution::Matched(m) => Some(&m.params),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }
}

/// Path resolver over an immutable, shared route table.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<RouteTable>,
}

impl Resolver {
    pub fn new(table: impl Into<Arc<RouteTable>>) -> Self {
        let table = table.into();
        if !table.has_fallback() {
            tracing::debug!("No catch-all route registered; unmatched paths resolve to NotFound");
        }
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a normalized path (leading `/`, no query or fragment).
    ///
    /// Never fails: an unmatched path is [`Resolution::NotFound`].
    pub fn resolve(&self, path: &str) -> Resolution {
        let segments = split_segments(path);

        for (index, route) in self.table.routes().iter().enumerate() {
            if let Some(params) = route.pattern.matches(&segments) {
                tracing::debug!(
                    path = %path,
                    view = %route.view,
                    pattern = %route.pattern,
                    params = params.len(),
                    "Route matched"
                );
                metrics::record_resolution(route.view);
                return Resolution::Matched(RouteMatch {
                    view: route.view,
                    params,
                    index,
                    name: route.name.clone(),
                    props: route.props,
                });
            }
        }

        tracing::debug!(path = %path, "No route matched");
        metrics::record_not_found();
        Resolution::NotFound {
            requested_path: path.to_string(),
        }
    }

    /// Build the path of a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, HrefError> {
        self.table.href(name, params)
    }
}

/// Normalize a raw location before resolution.
///
/// Strips `?query` and `#fragment`, forces a leading `/`, and drops trailing
/// slashes. Case and percent-encoding are left untouched; decoding belongs to
/// the host that produced the location.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');
    let trimmed = trimmed.trim_start_matches('/');
    format!("/{trimmed}")
}
