//! Job board route resolver library.
//!
//! Maps requested paths to page views through an ordered, immutable route
//! table: first match wins, `:name` segments bind parameters, and an
//! optional trailing catch-all turns every miss into a not-found view.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::{Resolution, Resolver, RouteTable, ViewId};
