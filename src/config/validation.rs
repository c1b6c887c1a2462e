//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Parse every route pattern and apply the table rules
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ConfigurationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::RouterConfig;
use crate::routing::table::{check_routes, config_route};
use crate::routing::ConfigurationError;

/// Check a config without building anything from it.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ConfigurationError>> {
    let mut errors = Vec::new();
    let mut routes = Vec::with_capacity(config.routes.len());

    for (index, route) in config.routes.iter().enumerate() {
        match config_route(index, route) {
            Ok(route) => routes.push(route),
            Err(e) => errors.push(e),
        }
    }

    // Table rules only make sense once every pattern parsed.
    if errors.is_empty() {
        errors.extend(check_routes(&routes));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
