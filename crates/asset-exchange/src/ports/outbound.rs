//! # Outbound Ports
//!
//! Traits for the external collaborators the exchange depends on: the
//! ledger's keyed store, the transaction context (caller identity and
//! submission time), and the asset/supply bookkeeping.
//!
//! All reads are transaction snapshots and all writes are provisional
//! until the enclosing ledger transaction commits; serialization of
//! conflicting invocations is the store's responsibility.

use crate::domain::{BondAsset, Identity, StoreError};

/// Keyed ledger store - outbound port.
///
/// Scoped to one atomic transaction per invocation.
pub trait LedgerStore: Send + Sync {
    /// Read a value; `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write a value.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Invoking-caller credential - outbound port.
///
/// Injected so the core stays testable without a real credential chain.
pub trait CallerIdentity: Send + Sync {
    /// Identity of the transaction creator, as an opaque credential.
    fn current_caller(&self) -> Identity;
}

/// Transaction-submission clock - outbound port.
///
/// Expiry comparisons are evaluated once per invocation against this
/// time; nothing polls or retries.
pub trait TimeSource: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now_secs(&self) -> u64;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_secs(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Bond asset registry - outbound port.
///
/// Ownership bookkeeping lives outside the exchange; each protocol step
/// makes at most one read and one ownership write through this port.
pub trait BondRegistry: Send + Sync {
    /// Read a bond; `None` when no such asset exists.
    fn read_bond(&self, asset_type: &str, id: &str) -> Result<Option<BondAsset>, StoreError>;

    /// Transfer ownership of a bond to `new_owner`.
    fn update_owner(
        &self,
        asset_type: &str,
        id: &str,
        new_owner: &Identity,
    ) -> Result<(), StoreError>;
}

/// Fungible token supply bookkeeping - outbound port.
pub trait TokenLedger: Send + Sync {
    /// Units of `asset_type` currently held by `owner`.
    fn balance_of(&self, asset_type: &str, owner: &Identity) -> Result<u64, StoreError>;

    /// Remove units from an owner's holdings.
    fn debit(&self, asset_type: &str, owner: &Identity, num_units: u64) -> Result<(), StoreError>;

    /// Issue units to an owner's holdings.
    fn credit(&self, asset_type: &str, owner: &Identity, num_units: u64) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_source_is_past_2020() {
        // Sanity floor: 2020-01-01T00:00:00Z.
        assert!(SystemTimeSource.now_secs() > 1_577_836_800);
    }
}
