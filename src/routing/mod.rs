//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming navigation (path from the host shell)
//!     → normalize_path (strip query/fragment, trailing slashes)
//!     → router.rs (ordered route scan)
//!     → matcher.rs (structural segment match, param binding)
//!     → Return: Matched { view, params } or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[] / (pattern, view) pairs
//!     → matcher.rs (parse patterns, reject malformed ones)
//!     → table.rs (table-level checks: catch-all last, unique names)
//!     → Freeze as immutable RouteTable, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in the hot path
//! - Deterministic: same input always matches same route
//! - First match wins (registration order, not best match)

pub mod matcher;
pub mod params;
pub mod router;
pub mod table;
pub mod view;

pub use matcher::{PatternError, RoutePattern, Segment};
pub use params::{ParamError, Params};
pub use router::{normalize_path, Resolution, Resolver, RouteMatch};
pub use table::{ConfigurationError, HrefError, Route, RouteTable};
pub use view::ViewId;
