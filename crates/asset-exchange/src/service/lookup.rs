//! # Contract-Id Lookup Index
//!
//! Bidirectional mapping between a contract identifier and the underlying
//! asset identity or quantity. Entries are created when a lock is placed
//! and deleted when the lock resolves; their lifetime mirrors the lock
//! record's exactly.

use super::AssetExchangeService;
use crate::domain::{AssetExchangeError, ContractId, ContractedAsset, StoreError};

/// Separator reserved for composite keys; key attributes must not contain it.
const KEY_SEP: char = '\u{0}';

pub(super) fn composite_key(prefix: &str, attributes: &[&str]) -> String {
    let mut key = String::from(prefix);
    for attribute in attributes {
        key.push(KEY_SEP);
        key.push_str(attribute);
    }
    key
}

impl AssetExchangeService {
    pub(super) fn bond_lock_key(&self, asset_type: &str, id: &str) -> String {
        composite_key(&self.config.bond_lock_prefix, &[asset_type, id])
    }

    pub(super) fn fungible_lock_key(&self, contract_id: &ContractId) -> String {
        composite_key(&self.config.fungible_lock_prefix, &[contract_id.as_str()])
    }

    pub(super) fn contract_lookup_key(&self, contract_id: &ContractId) -> String {
        composite_key(&self.config.contract_lookup_prefix, &[contract_id.as_str()])
    }

    pub(super) fn asset_lookup_key(&self, asset_type: &str, id: &str) -> String {
        composite_key(&self.config.asset_lookup_prefix, &[asset_type, id])
    }

    fn put_lookup(
        &self,
        operation: &'static str,
        key: &str,
        asset: &ContractedAsset,
    ) -> Result<(), AssetExchangeError> {
        let bytes = bincode::serialize(asset)
            .map_err(|e| AssetExchangeError::store(operation, StoreError::new(e)))?;
        self.store
            .put(key, bytes)
            .map_err(|e| AssetExchangeError::store(operation, e))
    }

    fn get_lookup(
        &self,
        operation: &'static str,
        key: &str,
    ) -> Result<Option<ContractedAsset>, AssetExchangeError> {
        let bytes = self
            .store
            .get(key)
            .map_err(|e| AssetExchangeError::store(operation, e))?;
        match bytes {
            None => Ok(None),
            Some(bytes) => bincode::deserialize(&bytes).map(Some).map_err(|e| {
                AssetExchangeError::store(
                    operation,
                    StoreError::new(format!("corrupt lookup entry at {key}: {e}")),
                )
            }),
        }
    }

    /// Record both directions of the bond mapping.
    pub(super) fn create_bond_lookup(
        &self,
        operation: &'static str,
        contract_id: &ContractId,
        asset_type: &str,
        id: &str,
    ) -> Result<(), AssetExchangeError> {
        let asset = ContractedAsset::Bond {
            asset_type: asset_type.to_string(),
            id: id.to_string(),
        };
        self.put_lookup(operation, &self.contract_lookup_key(contract_id), &asset)?;
        let reverse = bincode::serialize(contract_id)
            .map_err(|e| AssetExchangeError::store(operation, StoreError::new(e)))?;
        self.store
            .put(&self.asset_lookup_key(asset_type, id), reverse)
            .map_err(|e| AssetExchangeError::store(operation, e))
    }

    /// Record the fungible mapping (contract id direction only; the pool
    /// has no standalone asset identity to map back from).
    pub(super) fn create_fungible_lookup(
        &self,
        operation: &'static str,
        contract_id: &ContractId,
        asset_type: &str,
        num_units: u64,
    ) -> Result<(), AssetExchangeError> {
        let asset = ContractedAsset::Fungible {
            asset_type: asset_type.to_string(),
            num_units,
        };
        self.put_lookup(operation, &self.contract_lookup_key(contract_id), &asset)
    }

    /// Resolve a contract id to its bond asset identity.
    ///
    /// Fails `NotFound` when the entry is absent or belongs to the other
    /// asset class; callers must use the accessor matching what they locked.
    pub(super) fn fetch_bond_lookup(
        &self,
        operation: &'static str,
        contract_id: &ContractId,
    ) -> Result<(String, String), AssetExchangeError> {
        let key = self.contract_lookup_key(contract_id);
        match self.get_lookup(operation, &key)? {
            Some(ContractedAsset::Bond { asset_type, id }) => Ok((asset_type, id)),
            Some(ContractedAsset::Fungible { .. }) | None => Err(AssetExchangeError::NotFound {
                key: format!("bond asset for contract {contract_id}"),
            }),
        }
    }

    /// Resolve a contract id to its fungible pool.
    pub(super) fn fetch_fungible_lookup(
        &self,
        operation: &'static str,
        contract_id: &ContractId,
    ) -> Result<(String, u64), AssetExchangeError> {
        let key = self.contract_lookup_key(contract_id);
        match self.get_lookup(operation, &key)? {
            Some(ContractedAsset::Fungible {
                asset_type,
                num_units,
            }) => Ok((asset_type, num_units)),
            Some(ContractedAsset::Bond { .. }) | None => Err(AssetExchangeError::NotFound {
                key: format!("fungible pool for contract {contract_id}"),
            }),
        }
    }

    /// Remove both directions of the bond mapping.
    pub(super) fn delete_bond_lookup(
        &self,
        operation: &'static str,
        contract_id: &ContractId,
        asset_type: &str,
        id: &str,
    ) -> Result<(), AssetExchangeError> {
        self.delete_key(operation, &self.contract_lookup_key(contract_id))?;
        self.delete_key(operation, &self.asset_lookup_key(asset_type, id))
    }

    /// Remove the fungible mapping.
    pub(super) fn delete_fungible_lookup(
        &self,
        operation: &'static str,
        contract_id: &ContractId,
    ) -> Result<(), AssetExchangeError> {
        self.delete_key(operation, &self.contract_lookup_key(contract_id))
    }
}
