//! Prometheus metrics and structured logging for the market-making game.
//!
//! - Prometheus counters/gauges for rounds, fills, ties, forced trades
//! - Structured logging with tracing (pretty or JSON)

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::Metrics;
