//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (pattern syntax + table rules)
//!     → RouterConfig (validated)
//!     → RouteTable::from_config (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; the route table never changes afterwards
//! - All fields have defaults to allow minimal configs
//! - With no config file, the built-in job board table is used
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
