//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing and config produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics are cheap (facade calls, no-op without a recorder)

pub mod logging;
pub mod metrics;
