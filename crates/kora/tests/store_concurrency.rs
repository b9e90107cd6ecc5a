use chrono::Utc;
use kora::{InMemorySessionStore, PaymentSession, SessionStatus, SessionStore, SessionUpdate, Stablecoin};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_create_and_confirm() {
    let store = Arc::new(InMemorySessionStore::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    let session = PaymentSession::new(
                        format!("merchant_{worker}"),
                        format!("{i}.00"),
                        Stablecoin::Usdc,
                        None,
                        "https://example.com/webhook",
                        Utc::now(),
                    );
                    let id = session.session_id.clone();
                    store.create(session);
                    store.update(&id, SessionUpdate::confirm(Some(format!("0x{worker:02x}{i:04x}"))));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let all = store.get_all();
    assert_eq!(all.len(), 800);
    assert!(all.iter().all(|s| s.status == SessionStatus::Completed));
    assert!(all.iter().all(|s| s.transaction_hash.is_some()));
}

#[test]
fn test_racing_confirms_last_write_wins() {
    let store = Arc::new(InMemorySessionStore::new());
    let session = PaymentSession::new("m1", "10.00", Stablecoin::Dai, None, "https://x/cb", Utc::now());
    let id = session.session_id.clone();
    store.create(session);

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let store = store.clone();
            let id = id.clone();
            thread::spawn(move || {
                store.update(&id, SessionUpdate::confirm(Some(format!("0x{n}"))));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stored = store.get(&id).unwrap();
    assert_eq!(stored.status, SessionStatus::Completed);
    let hash = stored.transaction_hash.unwrap();
    assert!(["0x0", "0x1", "0x2", "0x3"].contains(&hash.as_str()));
}
