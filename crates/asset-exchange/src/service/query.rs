//! # Query Service
//!
//! Read-only lock-status lookups. No side effects; a positive result
//! implies no ownership, and any caller may query any lock.

use super::AssetExchangeService;
use crate::algorithms::parse_asset_agreement;
use crate::domain::{AssetExchangeError, ContractId};
use tracing::debug;

impl AssetExchangeService {
    /// Whether a live lock exists for the agreement's bond asset.
    pub fn is_asset_locked(&self, agreement_payload: &str) -> Result<bool, AssetExchangeError> {
        const OP: &str = "is_asset_locked";

        let agreement = parse_asset_agreement(agreement_payload)?;
        let key = self.bond_lock_key(&agreement.asset_type, &agreement.id);
        let locked = self.read_record(OP, &key)?.is_some();
        debug!(
            "[asset-exchange] bond {}:{} locked = {}",
            agreement.asset_type, agreement.id, locked
        );
        Ok(locked)
    }

    /// Whether a live bond lock exists for the contract id.
    ///
    /// A contract id with no lookup entry (or one of the other asset
    /// class) is simply not locked.
    pub fn is_asset_locked_query_using_contract_id(
        &self,
        contract_id: &str,
    ) -> Result<bool, AssetExchangeError> {
        const OP: &str = "is_asset_locked_query_using_contract_id";

        let contract_id = ContractId::new(contract_id);
        let locked = match self.fetch_bond_lookup(OP, &contract_id) {
            Ok((asset_type, id)) => self
                .read_record(OP, &self.bond_lock_key(&asset_type, &id))?
                .is_some(),
            Err(AssetExchangeError::NotFound { .. }) => false,
            Err(other) => return Err(other),
        };
        debug!("[asset-exchange] contract {contract_id} locked = {locked}");
        Ok(locked)
    }

    /// Whether a live fungible lock exists for the contract id.
    pub fn is_fungible_asset_locked(&self, contract_id: &str) -> Result<bool, AssetExchangeError> {
        const OP: &str = "is_fungible_asset_locked";

        let contract_id = ContractId::new(contract_id);
        let locked = self
            .read_record(OP, &self.fungible_lock_key(&contract_id))?
            .is_some();
        debug!("[asset-exchange] fungible contract {contract_id} locked = {locked}");
        Ok(locked)
    }
}
