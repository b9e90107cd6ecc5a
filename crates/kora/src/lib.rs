//! Kora payment sessions for stablecoin checkouts on Arbitrum One.
//!
//! A merchant opens a [`PaymentSession`] for an amount in one of the
//! registered [`Stablecoin`]s, the customer pays on-chain, and the frontend
//! reports the transaction hash back to confirm the session.
//!
//! # Modules
//!
//! - [`constants`] - chain id and the fixed stablecoin registry
//! - [`session`] - session record, status domain and partial updates
//! - [`store`] - the [`SessionStore`] trait and its in-memory backend
//! - [`error`] - validation errors shared with the HTTP layer
//!
//! # Quick example
//!
//! ```
//! use kora::{InMemorySessionStore, PaymentSession, SessionStatus, SessionStore, SessionUpdate, Stablecoin};
//!
//! let store = InMemorySessionStore::new();
//! let session = PaymentSession::new("m1", "10.00", Stablecoin::Usdc, None, "https://x/cb", chrono::Utc::now());
//! let id = session.session_id.clone();
//! store.create(session);
//!
//! store.update(&id, SessionUpdate::confirm(Some("0xabc".to_string())));
//! assert_eq!(store.get(&id).unwrap().status, SessionStatus::Completed);
//! ```

pub mod constants;
pub mod error;
pub mod security;
pub mod session;
pub mod store;

pub use constants::*;
pub use error::KoraError;
pub use session::{PaymentSession, SessionStatus, SessionUpdate};
pub use store::{InMemorySessionStore, SessionStore};
