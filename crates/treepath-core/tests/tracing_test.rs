//! Tests for the treepath tracing setup.

use std::sync::Mutex;

use treepath_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_treepath_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("TREEPATH_LOG", "debug");
    init_tracing();
    std::env::remove_var("TREEPATH_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

/// Garbage filters fall back to the default level instead of panicking.
#[test]
fn test_invalid_treepath_log_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("TREEPATH_LOG", "this_is=not=a=valid=filter");
    init_tracing();
    std::env::remove_var("TREEPATH_LOG");
}
