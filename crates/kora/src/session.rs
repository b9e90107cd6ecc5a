use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{Stablecoin, SESSION_ID_PREFIX, SESSION_TTL_SECS};

/// Lifecycle state of a payment session.
///
/// Only `Pending` (at creation) and `Completed` (at confirmation) are produced
/// by the gateway today. The other states stay in the domain so stores and
/// clients handle them once something starts emitting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Expired,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Processing => "processing",
            SessionStatus::Completed => "completed",
            SessionStatus::Failed => "failed",
            SessionStatus::Expired => "expired",
        }
    }

    /// Completed, failed and expired sessions are final.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionStatus::Completed | SessionStatus::Failed | SessionStatus::Expired
        )
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One merchant payment request and its on-chain settlement claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    pub session_id: String,
    pub merchant_id: String,
    /// Decimal amount exactly as the merchant sent it (e.g. "10.00").
    pub amount: String,
    pub currency: Stablecoin,
    pub customer_email: Option<String>,
    /// Merchant notification URL. Stored for a future webhook, never called.
    pub callback_url: String,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub transaction_hash: Option<String>,
}

impl PaymentSession {
    /// Open a `pending` session with a fresh `sess_` identifier that expires
    /// [`SESSION_TTL_SECS`] after `now`.
    pub fn new(
        merchant_id: impl Into<String>,
        amount: impl Into<String>,
        currency: Stablecoin,
        customer_email: Option<String>,
        callback_url: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id: generate_session_id(),
            merchant_id: merchant_id.into(),
            amount: amount.into(),
            currency,
            customer_email,
            callback_url: callback_url.into(),
            status: SessionStatus::Pending,
            created_at: now,
            expires_at: now + Duration::seconds(SESSION_TTL_SECS),
            transaction_hash: None,
        }
    }

    /// Whether `now` is past the session's expiry.
    ///
    /// Informational only: nothing sweeps or rejects expired sessions, and
    /// confirmation still succeeds after this returns `true`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// `sess_` followed by a random UUID v4.
pub fn generate_session_id() -> String {
    format!("{SESSION_ID_PREFIX}{}", uuid::Uuid::new_v4())
}

/// Partial session record for [`SessionStore::update`](crate::SessionStore::update).
///
/// A `Some` field replaces the stored value wholesale; `None` leaves it alone.
/// Optional record fields use a nested `Option` so an update can clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub merchant_id: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<Stablecoin>,
    pub customer_email: Option<Option<String>>,
    pub callback_url: Option<String>,
    pub status: Option<SessionStatus>,
    pub expires_at: Option<DateTime<Utc>>,
    pub transaction_hash: Option<Option<String>>,
}

impl SessionUpdate {
    /// The confirmation payload: mark `completed` and record whatever hash
    /// the caller reported, including none at all.
    ///
    /// There is no status precondition. Confirming a completed session again
    /// simply overwrites the hash.
    pub fn confirm(transaction_hash: Option<String>) -> Self {
        Self {
            status: Some(SessionStatus::Completed),
            transaction_hash: Some(transaction_hash),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge this update into `session`.
    pub fn apply_to(self, session: &mut PaymentSession) {
        if let Some(merchant_id) = self.merchant_id {
            session.merchant_id = merchant_id;
        }
        if let Some(amount) = self.amount {
            session.amount = amount;
        }
        if let Some(currency) = self.currency {
            session.currency = currency;
        }
        if let Some(customer_email) = self.customer_email {
            session.customer_email = customer_email;
        }
        if let Some(callback_url) = self.callback_url {
            session.callback_url = callback_url;
        }
        if let Some(status) = self.status {
            session.status = status;
        }
        if let Some(expires_at) = self.expires_at {
            session.expires_at = expires_at;
        }
        if let Some(transaction_hash) = self.transaction_hash {
            session.transaction_hash = transaction_hash;
        }
    }
}
