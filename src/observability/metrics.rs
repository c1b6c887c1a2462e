//! Resolution metrics.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): matched navigations by view
//! - `router_not_found_total` (counter): navigations with no matching route
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder
//!   these calls are no-ops
//! - Labels come from `ViewId::as_str`, so cardinality is bounded

use ::metrics::counter;

use crate::routing::ViewId;

pub fn record_resolution(view: ViewId) {
    counter!("router_resolutions_total", "view" => view.as_str()).increment(1);
}

pub fn record_not_found() {
    counter!("router_not_found_total").increment(1);
}
