use dashmap::DashMap;

use crate::session::{PaymentSession, SessionUpdate};

/// Trait for payment session storage backends.
///
/// Implementations must be thread-safe (`Send + Sync`). Each call is atomic
/// on its own, but there is no compare-and-set: a read followed by an update
/// can interleave with other callers.
pub trait SessionStore: Send + Sync {
    /// Insert a session keyed by its `session_id`.
    /// An existing record with the same id is silently replaced.
    fn create(&self, session: PaymentSession);

    /// Fetch a copy of the session, if present.
    fn get(&self, session_id: &str) -> Option<PaymentSession>;

    /// Shallow-merge `update` into an existing session.
    /// Does nothing when the id is unknown.
    fn update(&self, session_id: &str, update: SessionUpdate);

    /// Remove a session. Does nothing when the id is unknown.
    fn delete(&self, session_id: &str);

    /// Snapshot of every stored session, in no particular order.
    fn get_all(&self) -> Vec<PaymentSession>;

    /// Number of stored sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory session store backed by DashMap. Lost on restart, never evicts.
pub struct InMemorySessionStore {
    sessions: DashMap<String, PaymentSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, session: PaymentSession) {
        if let Some(previous) = self.sessions.insert(session.session_id.clone(), session) {
            tracing::warn!(
                session_id = %previous.session_id,
                "session id collision, previous record overwritten"
            );
        }
    }

    fn get(&self, session_id: &str) -> Option<PaymentSession> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    fn update(&self, session_id: &str, update: SessionUpdate) {
        if update.is_empty() {
            return;
        }
        // get_mut holds the shard lock, so the merge is atomic per session
        match self.sessions.get_mut(session_id) {
            Some(mut entry) => update.apply_to(entry.value_mut()),
            None => tracing::debug!(session_id = %session_id, "update on unknown session ignored"),
        }
    }

    fn delete(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }

    fn get_all(&self) -> Vec<PaymentSession> {
        self.sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
