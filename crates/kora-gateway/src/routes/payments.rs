use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use kora::{KoraError, PaymentSession, SessionStatus, SessionUpdate, Stablecoin};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::metrics;
use crate::state::AppState;

/// Body of POST /api/payments/create.
///
/// Every field is optional at the wire level so a missing field surfaces as
/// our own 400 rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaymentRequest {
    pub merchant_id: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub customer_email: Option<String>,
    pub callback_url: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug)]
pub struct ValidatedPayment<'a> {
    pub merchant_id: &'a str,
    pub amount: &'a str,
    pub currency: Stablecoin,
    pub customer_email: Option<&'a str>,
    pub callback_url: &'a str,
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, KoraError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(KoraError::MissingField(field))
}

impl CreatePaymentRequest {
    /// Presence is checked for all required fields before the currency is
    /// looked up, so a request missing fields never reports a currency error.
    pub fn validate(&self) -> Result<ValidatedPayment<'_>, KoraError> {
        let merchant_id = required(&self.merchant_id, "merchant_id")?;
        let amount = required(&self.amount, "amount")?;
        let currency = required(&self.currency, "currency")?;
        let callback_url = required(&self.callback_url, "callback_url")?;

        Ok(ValidatedPayment {
            merchant_id,
            amount,
            currency: currency.parse()?,
            customer_email: self.customer_email.as_deref(),
            callback_url,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentResponse {
    pub session_id: String,
    pub payment_url: String,
    pub expires_at: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentStatusResponse {
    pub session_id: String,
    pub status: SessionStatus,
    pub amount: String,
    pub currency: Stablecoin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

impl From<PaymentSession> for PaymentStatusResponse {
    fn from(session: PaymentSession) -> Self {
        Self {
            session_id: session.session_id,
            status: session.status,
            amount: session.amount,
            currency: session.currency,
            transaction_hash: session.transaction_hash,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub transaction_hash: Option<String>,
}

impl ConfirmPaymentRequest {
    /// An absent or blank body means "no hash"; anything else must be a
    /// valid JSON object.
    pub fn from_body(body: &[u8]) -> Result<Self, GatewayError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "rejected confirm body");
            GatewayError::Validation("Invalid request body".to_string())
        })
    }
}

/// POST /api/payments/create - Open a new payment session
pub async fn create_payment(
    body: web::Json<CreatePaymentRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, GatewayError> {
    let payment = body.validate().map_err(|e| {
        let reason = match &e {
            KoraError::MissingField(_) => "missing_field",
            KoraError::InvalidCurrency(_) => "invalid_currency",
        };
        metrics::VALIDATION_FAILURES.with_label_values(&[reason]).inc();
        tracing::debug!(error = %e, "create payment rejected");
        GatewayError::from(e)
    })?;

    let session = PaymentSession::new(
        payment.merchant_id,
        payment.amount,
        payment.currency,
        payment.customer_email.map(String::from),
        payment.callback_url,
        Utc::now(),
    );

    let response = CreatePaymentResponse {
        payment_url: state.config.payment_url(&session.session_id),
        expires_at: session
            .expires_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        session_id: session.session_id.clone(),
    };

    tracing::info!(
        session_id = %session.session_id,
        merchant_id = %session.merchant_id,
        amount = %session.amount,
        currency = %session.currency,
        "payment session created"
    );

    metrics::SESSIONS_CREATED
        .with_label_values(&[session.currency.symbol()])
        .inc();
    state.store.create(session);
    metrics::SESSIONS_STORED.set(state.store.len() as i64);

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/payments/{session_id} - Session status
pub async fn get_payment(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, GatewayError> {
    let session_id = path.into_inner();

    let session = match state.store.get(&session_id) {
        Some(s) => s,
        None => {
            metrics::SESSION_LOOKUPS
                .with_label_values(&["not_found"])
                .inc();
            return Err(GatewayError::SessionNotFound(session_id));
        }
    };
    metrics::SESSION_LOOKUPS.with_label_values(&["found"]).inc();

    Ok(HttpResponse::Ok().json(PaymentStatusResponse::from(session)))
}

/// POST /api/payments/{session_id}/confirm - Record the customer's transaction.
///
/// The hash is taken on trust: it is not checked against the chain, the
/// session's amount or currency, its current status, or its expiry.
pub async fn confirm_payment(
    path: web::Path<String>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, GatewayError> {
    let session_id = path.into_inner();
    let transaction_hash = ConfirmPaymentRequest::from_body(&body)?.transaction_hash;

    let session = state
        .store
        .get(&session_id)
        .ok_or_else(|| GatewayError::SessionNotFound(session_id.clone()))?;

    if session.is_expired_at(Utc::now()) {
        tracing::debug!(session_id = %session_id, "confirming session past its expiry");
    }

    state
        .store
        .update(&session_id, SessionUpdate::confirm(transaction_hash.clone()));
    metrics::SESSIONS_CONFIRMED.inc();

    // TODO: notify session.callback_url once webhook delivery exists
    tracing::info!(
        session_id = %session_id,
        tx = transaction_hash.as_deref().unwrap_or("none"),
        previous_status = %session.status,
        "payment completed"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/payments/create", web::post().to(create_payment))
        .route("/api/payments/{session_id}", web::get().to(get_payment))
        .route(
            "/api/payments/{session_id}/confirm",
            web::post().to(confirm_payment),
        );
}
