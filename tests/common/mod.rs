// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the integration tests.

use propcfg::domain::{ConfigKey, ConfigValue, Store};
use std::sync::{Mutex, MutexGuard, Once, PoisonError};

#[allow(dead_code)]
static TRACING: Once = Once::new();

/// Serializes tests that touch the process-wide configuration.
#[allow(dead_code)]
static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

/// Installs a test-friendly tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Takes exclusive access to the process-wide configuration and resets it.
#[allow(dead_code)]
pub fn lock_global() -> MutexGuard<'static, ()> {
    let guard = GLOBAL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    propcfg::reset();
    guard
}

/// Builds a defaulted store with the given values inserted on top.
#[allow(dead_code)]
pub fn store_with(values: impl IntoIterator<Item = ConfigValue>) -> Store {
    let mut store = Store::with_defaults();
    for value in values {
        store.insert(value);
    }
    store
}

/// Keys grouped by the type of their built-in default.
#[allow(dead_code)]
pub fn keys_of_kind(kind: propcfg::domain::ValueKind) -> Vec<ConfigKey> {
    ConfigKey::ALL
        .into_iter()
        .filter(|key| key.default_value().kind() == kind)
        .collect()
}
