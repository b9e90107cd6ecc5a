use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use std::sync::{LazyLock, Once};

pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

// Session lifecycle counters
pub static SESSIONS_CREATED: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "kora_sessions_created_total",
            "Payment sessions created per currency",
        ),
        &["currency"],
    )
    .unwrap()
});

pub static SESSIONS_CONFIRMED: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "kora_sessions_confirmed_total",
        "Total number of confirm calls applied to a session",
    )
    .unwrap()
});

pub static SESSION_LOOKUPS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new("kora_session_lookups_total", "Session status lookups"),
        &["result"],
    )
    .unwrap()
});

pub static VALIDATION_FAILURES: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "kora_validation_failures_total",
            "Rejected session creation requests",
        ),
        &["reason"],
    )
    .unwrap()
});

pub static SESSIONS_STORED: LazyLock<IntGauge> = LazyLock::new(|| {
    IntGauge::new("kora_sessions_stored", "Sessions currently held in the store").unwrap()
});

static REGISTER: Once = Once::new();

/// Register all metrics with the registry. Safe to call more than once.
pub fn register_metrics() {
    REGISTER.call_once(|| {
        REGISTRY
            .register(Box::new(SESSIONS_CREATED.clone()))
            .unwrap();
        REGISTRY
            .register(Box::new(SESSIONS_CONFIRMED.clone()))
            .unwrap();
        REGISTRY
            .register(Box::new(SESSION_LOOKUPS.clone()))
            .unwrap();
        REGISTRY
            .register(Box::new(VALIDATION_FAILURES.clone()))
            .unwrap();
        REGISTRY
            .register(Box::new(SESSIONS_STORED.clone()))
            .unwrap();
    });
}

/// Encode the registry in the Prometheus text exposition format.
pub fn metrics_output() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}
