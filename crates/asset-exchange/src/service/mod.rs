//! # Asset Exchange Service
//!
//! Application service implementing the inbound port. Each operation runs
//! to completion inside the single ledger transaction supplied by the
//! environment; the managers below touch the outside world only through
//! the injected outbound ports.
//!
//! ```text
//! service/
//! ├── lock.rs      # Lock Manager
//! ├── claim.rs     # Claim Manager
//! ├── unlock.rs    # Unlock (Reclaim) Manager
//! ├── query.rs     # Query Service
//! └── lookup.rs    # Contract-Id Lookup Index
//! ```

mod claim;
mod lock;
mod lookup;
mod query;
mod unlock;


use crate::config::ExchangeConfig;
use crate::domain::{AssetExchangeError, AssetLockRecord, Identity, StoreError};
use crate::ports::{
    AssetExchangeApi, BondRegistry, CallerIdentity, LedgerStore, TimeSource, TokenLedger,
};
use std::sync::Arc;

/// Asset exchange service over injected ledger, bookkeeping, and
/// transaction-context ports.
pub struct AssetExchangeService {
    store: Arc<dyn LedgerStore>,
    bonds: Arc<dyn BondRegistry>,
    tokens: Arc<dyn TokenLedger>,
    caller: Arc<dyn CallerIdentity>,
    clock: Arc<dyn TimeSource>,
    config: ExchangeConfig,
}

impl AssetExchangeService {
    /// Create a service with the default key namespaces.
    pub fn new(
        store: Arc<dyn LedgerStore>,
        bonds: Arc<dyn BondRegistry>,
        tokens: Arc<dyn TokenLedger>,
        caller: Arc<dyn CallerIdentity>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self::with_config(store, bonds, tokens, caller, clock, ExchangeConfig::default())
    }

    /// Create a service with explicit key namespaces.
    pub fn with_config(
        store: Arc<dyn LedgerStore>,
        bonds: Arc<dyn BondRegistry>,
        tokens: Arc<dyn TokenLedger>,
        caller: Arc<dyn CallerIdentity>,
        clock: Arc<dyn TimeSource>,
        config: ExchangeConfig,
    ) -> Self {
        Self {
            store,
            bonds,
            tokens,
            caller,
            clock,
            config,
        }
    }

    /// Transaction creator for the current invocation.
    fn current_caller(&self) -> Identity {
        self.caller.current_caller()
    }

    /// Transaction-submission time, sampled once per invocation.
    fn now_secs(&self) -> u64 {
        self.clock.now_secs()
    }

    fn read_record(
        &self,
        operation: &'static str,
        key: &str,
    ) -> Result<Option<AssetLockRecord>, AssetExchangeError> {
        let bytes = self
            .store
            .get(key)
            .map_err(|e| AssetExchangeError::store(operation, e))?;
        match bytes {
            None => Ok(None),
            Some(bytes) => bincode::deserialize(&bytes)
                .map(Some)
                .map_err(|e| {
                    AssetExchangeError::store(
                        operation,
                        StoreError::new(format!("corrupt lock record at {key}: {e}")),
                    )
                }),
        }
    }

    fn put_record(
        &self,
        operation: &'static str,
        key: &str,
        record: &AssetLockRecord,
    ) -> Result<(), AssetExchangeError> {
        let bytes = bincode::serialize(record)
            .map_err(|e| AssetExchangeError::store(operation, StoreError::new(e)))?;
        self.store
            .put(key, bytes)
            .map_err(|e| AssetExchangeError::store(operation, e))
    }

    fn delete_key(&self, operation: &'static str, key: &str) -> Result<(), AssetExchangeError> {
        self.store
            .delete(key)
            .map_err(|e| AssetExchangeError::store(operation, e))
    }
}

impl AssetExchangeApi for AssetExchangeService {
    fn lock_asset(
        &self,
        agreement_payload: &str,
        lock_payload: &str,
    ) -> Result<String, AssetExchangeError> {
        AssetExchangeService::lock_asset(self, agreement_payload, lock_payload)
    }

    fn lock_fungible_asset(
        &self,
        agreement_payload: &str,
        lock_payload: &str,
    ) -> Result<String, AssetExchangeError> {
        AssetExchangeService::lock_fungible_asset(self, agreement_payload, lock_payload)
    }

    fn is_asset_locked(&self, agreement_payload: &str) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::is_asset_locked(self, agreement_payload)
    }

    fn is_asset_locked_query_using_contract_id(
        &self,
        contract_id: &str,
    ) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::is_asset_locked_query_using_contract_id(self, contract_id)
    }

    fn is_fungible_asset_locked(&self, contract_id: &str) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::is_fungible_asset_locked(self, contract_id)
    }

    fn claim_asset(
        &self,
        agreement_payload: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::claim_asset(self, agreement_payload, claim_payload)
    }

    fn claim_asset_using_contract_id(
        &self,
        contract_id: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::claim_asset_using_contract_id(self, contract_id, claim_payload)
    }

    fn claim_fungible_asset(
        &self,
        contract_id: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::claim_fungible_asset(self, contract_id, claim_payload)
    }

    fn unlock_asset(&self, agreement_payload: &str) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::unlock_asset(self, agreement_payload)
    }

    fn unlock_bond_asset_using_contract_id(
        &self,
        contract_id: &str,
    ) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::unlock_bond_asset_using_contract_id(self, contract_id)
    }

    fn unlock_fungible_asset(&self, contract_id: &str) -> Result<bool, AssetExchangeError> {
        AssetExchangeService::unlock_fungible_asset(self, contract_id)
    }
}
