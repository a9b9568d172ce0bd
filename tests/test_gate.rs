//! Request supersession: only the latest ticket's response is admitted.

use std::sync::Arc;
use std::thread;

use apt_forecast_sdk::RequestGate;

#[test]
fn latest_ticket_is_admitted() {
    let gate = RequestGate::new();
    let t = gate.issue();
    assert!(gate.is_current(t));
    assert_eq!(gate.admit(t, "chart"), Some("chart"));
}

#[test]
fn superseded_ticket_is_dropped() {
    let gate = RequestGate::new();
    let first = gate.issue();
    let second = gate.issue();

    // Responses arrive newest-first, then the stale one.
    assert_eq!(gate.admit(second, 2), Some(2));
    assert_eq!(gate.admit(first, 1), None);
    assert!(first < second);
}

#[test]
fn stale_response_is_dropped_even_if_it_arrives_first() {
    let gate = RequestGate::new();
    let first = gate.issue();
    let second = gate.issue();

    assert_eq!(gate.admit(first, 1), None);
    assert_eq!(gate.admit(second, 2), Some(2));
}

#[test]
fn tickets_are_unique_across_threads() {
    let gate = Arc::new(RequestGate::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gate = gate.clone();
            thread::spawn(move || (0..100).map(|_| gate.issue().sequence()).collect::<Vec<_>>())
        })
        .collect();

    let mut all: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 800);

    let last = gate.issue();
    assert_eq!(last.sequence(), 801);
    assert!(gate.is_current(last));
}
