//! Kora gateway - the HTTP boundary in front of the payment session store.
//!
//! # Modules
//!
//! - [`config`] - [`GatewayConfig`] loaded from the environment
//! - [`routes`] - health, metrics, currency registry and payment session endpoints
//! - [`state`] - shared [`AppState`] holding the injected session store
//! - [`error`] - [`GatewayError`] and its JSON error responses
//! - [`metrics`] - Prometheus counters for session activity

pub mod config;
pub mod cors;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use state::AppState;
