//! In-memory ledger store and transaction-context adapters.
//!
//! Substitutes for the external ledger in tests and local runs. A real
//! deployment binds these ports to the host ledger's transaction context.

use crate::domain::{Identity, StoreError};
use crate::ports::{CallerIdentity, LedgerStore, TimeSource};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory keyed store.
#[derive(Default)]
pub struct InMemoryLedgerStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
    /// When set, every operation fails with this message.
    failure: RwLock<Option<String>>,
}

impl InMemoryLedgerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail, for error-path tests.
    pub fn fail_with(&self, message: &str) {
        *self.failure.write() = Some(message.to_string());
    }

    /// Clear a previously injected failure.
    pub fn heal(&self) {
        *self.failure.write() = None;
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match &*self.failure.read() {
            Some(message) => Err(StoreError::new(message)),
            None => Ok(()),
        }
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.check_failure()?;
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.check_failure()?;
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.check_failure()?;
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Fixed identity source: every invocation appears to come from the same
/// configured caller. Swap it between calls to simulate multiple parties.
pub struct StaticCaller {
    caller: RwLock<Identity>,
}

impl StaticCaller {
    /// Create a caller source for the given credential.
    pub fn new(caller: impl Into<Identity>) -> Self {
        Self {
            caller: RwLock::new(caller.into()),
        }
    }

    /// Change the acting caller.
    pub fn set_caller(&self, caller: impl Into<Identity>) {
        *self.caller.write() = caller.into();
    }
}

impl CallerIdentity for StaticCaller {
    fn current_caller(&self) -> Identity {
        self.caller.read().clone()
    }
}

/// Settable clock for deterministic expiry tests.
pub struct FixedTimeSource {
    now_secs: RwLock<u64>,
}

impl FixedTimeSource {
    /// Create a clock pinned at `now_secs`.
    pub fn new(now_secs: u64) -> Self {
        Self {
            now_secs: RwLock::new(now_secs),
        }
    }

    /// Pin the clock at a new time.
    pub fn set_time(&self, now_secs: u64) {
        *self.now_secs.write() = now_secs;
    }

    /// Advance the clock.
    pub fn advance(&self, secs: u64) {
        *self.now_secs.write() += secs;
    }
}

impl TimeSource for FixedTimeSource {
    fn now_secs(&self) -> u64 {
        *self.now_secs.read()
    }
}
