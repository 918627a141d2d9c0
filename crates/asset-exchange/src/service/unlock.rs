//! # Unlock (Reclaim) Manager
//!
//! Returns a locked asset or pool to its original holder once the lock
//! has expired, then retires the lock.

use super::AssetExchangeService;
use crate::algorithms::{bond_contract_id, parse_asset_agreement};
use crate::domain::{
    AssetExchangeAgreement, AssetExchangeError, AssetLockRecord, ContractId, Identity,
};
use tracing::info;

fn rejected(reason: impl ToString) -> AssetExchangeError {
    AssetExchangeError::UnlockRejected {
        reason: reason.to_string(),
    }
}

impl AssetExchangeService {
    /// Reclaim an expired bond lock by re-supplying the original agreement.
    ///
    /// Ownership never moved, so only the lock record and lookup entries
    /// are removed.
    pub fn unlock_asset(&self, agreement_payload: &str) -> Result<bool, AssetExchangeError> {
        const OP: &str = "unlock_asset";

        let mut agreement = parse_asset_agreement(agreement_payload)?;
        let caller = self.current_caller();
        if agreement.locker.is_empty() {
            agreement.locker = caller.clone();
        }

        let key = self.bond_lock_key(&agreement.asset_type, &agreement.id);
        let record = self.read_record(OP, &key)?.ok_or_else(|| {
            rejected(format!(
                "no live lock for bond {}:{}",
                agreement.asset_type, agreement.id
            ))
        })?;

        if record.locker != agreement.locker
            || (!agreement.recipient.is_empty() && record.recipient != agreement.recipient)
        {
            return Err(rejected("agreement does not match the stored lock"));
        }
        self.check_unlock(&record, &caller)?;

        let contract_id = bond_contract_id(&AssetExchangeAgreement {
            asset_type: agreement.asset_type.clone(),
            id: agreement.id.clone(),
            locker: record.locker.clone(),
            recipient: record.recipient.clone(),
        });
        self.delete_key(OP, &key)?;
        self.delete_bond_lookup(OP, &contract_id, &agreement.asset_type, &agreement.id)?;

        info!(
            "[asset-exchange] unlocked bond {}:{} (contract {})",
            agreement.asset_type, agreement.id, contract_id
        );
        Ok(true)
    }

    /// Reclaim an expired bond lock addressed by contract id.
    pub fn unlock_bond_asset_using_contract_id(
        &self,
        contract_id: &str,
    ) -> Result<bool, AssetExchangeError> {
        const OP: &str = "unlock_bond_asset_using_contract_id";

        let caller = self.current_caller();
        let contract_id = ContractId::new(contract_id);

        let (asset_type, id) = self.fetch_bond_lookup(OP, &contract_id)?;
        let key = self.bond_lock_key(&asset_type, &id);
        let record = self
            .read_record(OP, &key)?
            .ok_or_else(|| rejected(format!("no live lock for bond {asset_type}:{id}")))?;

        self.check_unlock(&record, &caller)?;

        self.delete_key(OP, &key)?;
        self.delete_bond_lookup(OP, &contract_id, &asset_type, &id)?;

        info!(
            "[asset-exchange] unlocked bond {}:{} (contract {})",
            asset_type, id, contract_id
        );
        Ok(true)
    }

    /// Reclaim an expired fungible lock addressed by contract id.
    ///
    /// Re-issues the previously debited units back to the locker.
    pub fn unlock_fungible_asset(&self, contract_id: &str) -> Result<bool, AssetExchangeError> {
        const OP: &str = "unlock_fungible_asset";

        let caller = self.current_caller();
        let contract_id = ContractId::new(contract_id);

        let (asset_type, num_units) = self.fetch_fungible_lookup(OP, &contract_id)?;
        let key = self.fungible_lock_key(&contract_id);
        let record = self
            .read_record(OP, &key)?
            .ok_or_else(|| rejected(format!("no live lock for contract {contract_id}")))?;

        self.check_unlock(&record, &caller)?;

        self.tokens
            .credit(&asset_type, &record.locker, num_units)
            .map_err(|e| AssetExchangeError::store(OP, e))?;
        self.delete_key(OP, &key)?;
        self.delete_fungible_lookup(OP, &contract_id)?;

        info!(
            "[asset-exchange] unlocked {} units of {} (contract {})",
            num_units, asset_type, contract_id
        );
        Ok(true)
    }

    /// Unlock gate: only the original locker may reclaim, and only after
    /// the lock's expiry has elapsed.
    fn check_unlock(
        &self,
        record: &AssetLockRecord,
        caller: &Identity,
    ) -> Result<(), AssetExchangeError> {
        if &record.locker != caller {
            return Err(rejected("only the locker may unlock"));
        }
        if !record.lock_info.reclaim_allowed(self.now_secs()) {
            return Err(rejected("lock has not expired"));
        }
        Ok(())
    }
}
