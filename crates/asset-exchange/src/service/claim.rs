//! # Claim Manager
//!
//! Validates a revealed secret against a stored lock, transfers
//! ownership/supply to the claimant, and retires the lock. Rejections
//! leave all ledger state untouched.

use super::AssetExchangeService;
use crate::algorithms::{bond_contract_id, parse_asset_agreement, parse_claim_info};
use crate::domain::{
    AssetExchangeAgreement, AssetExchangeError, AssetLockRecord, ClaimInfo, ContractId, Identity,
};
use tracing::info;

fn rejected(reason: impl ToString) -> AssetExchangeError {
    AssetExchangeError::ClaimRejected {
        reason: reason.to_string(),
    }
}

impl AssetExchangeService {
    /// Claim a locked bond asset by re-supplying the original agreement.
    pub fn claim_asset(
        &self,
        agreement_payload: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError> {
        const OP: &str = "claim_asset";

        let mut agreement = parse_asset_agreement(agreement_payload)?;
        let claim = parse_claim_info(claim_payload)?;
        let claimant = self.current_caller();
        if agreement.recipient.is_empty() {
            agreement.recipient = claimant.clone();
        }

        let key = self.bond_lock_key(&agreement.asset_type, &agreement.id);
        let record = self.read_record(OP, &key)?.ok_or_else(|| {
            rejected(format!(
                "no live lock for bond {}:{}",
                agreement.asset_type, agreement.id
            ))
        })?;

        if record.locker != agreement.locker || record.recipient != agreement.recipient {
            return Err(rejected("agreement does not match the stored lock"));
        }
        self.check_claim(&record, &claim, &claimant)?;

        self.bonds
            .update_owner(&agreement.asset_type, &agreement.id, &claimant)
            .map_err(|e| AssetExchangeError::store(OP, e))?;

        // Contract id recomputed from the stored roles; identical to the
        // one handed out at lock time.
        let contract_id = bond_contract_id(&AssetExchangeAgreement {
            asset_type: agreement.asset_type.clone(),
            id: agreement.id.clone(),
            locker: record.locker.clone(),
            recipient: record.recipient.clone(),
        });
        self.delete_key(OP, &key)?;
        self.delete_bond_lookup(OP, &contract_id, &agreement.asset_type, &agreement.id)?;

        info!(
            "[asset-exchange] claimed bond {}:{} (contract {})",
            agreement.asset_type, agreement.id, contract_id
        );
        Ok(true)
    }

    /// Claim a locked bond asset addressed by contract id.
    pub fn claim_asset_using_contract_id(
        &self,
        contract_id: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError> {
        const OP: &str = "claim_asset_using_contract_id";

        let claim = parse_claim_info(claim_payload)?;
        let claimant = self.current_caller();
        let contract_id = ContractId::new(contract_id);

        let (asset_type, id) = self.fetch_bond_lookup(OP, &contract_id)?;
        let key = self.bond_lock_key(&asset_type, &id);
        let record = self
            .read_record(OP, &key)?
            .ok_or_else(|| rejected(format!("no live lock for bond {asset_type}:{id}")))?;

        self.check_claim(&record, &claim, &claimant)?;

        self.bonds
            .update_owner(&asset_type, &id, &claimant)
            .map_err(|e| AssetExchangeError::store(OP, e))?;
        self.delete_key(OP, &key)?;
        self.delete_bond_lookup(OP, &contract_id, &asset_type, &id)?;

        info!(
            "[asset-exchange] claimed bond {}:{} (contract {})",
            asset_type, id, contract_id
        );
        Ok(true)
    }

    /// Claim a locked fungible pool addressed by contract id.
    pub fn claim_fungible_asset(
        &self,
        contract_id: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError> {
        const OP: &str = "claim_fungible_asset";

        let claim = parse_claim_info(claim_payload)?;
        let claimant = self.current_caller();
        let contract_id = ContractId::new(contract_id);

        let (asset_type, num_units) = self.fetch_fungible_lookup(OP, &contract_id)?;
        let key = self.fungible_lock_key(&contract_id);
        let record = self
            .read_record(OP, &key)?
            .ok_or_else(|| rejected(format!("no live lock for contract {contract_id}")))?;

        self.check_claim(&record, &claim, &claimant)?;

        self.tokens
            .credit(&asset_type, &claimant, num_units)
            .map_err(|e| AssetExchangeError::store(OP, e))?;
        self.delete_key(OP, &key)?;
        self.delete_fungible_lookup(OP, &contract_id)?;

        info!(
            "[asset-exchange] claimed {} units of {} (contract {})",
            num_units, asset_type, contract_id
        );
        Ok(true)
    }

    /// Mechanism-independent claim gate: the claimant must be the stored
    /// recipient and the claim must satisfy the lock's verification rule.
    fn check_claim(
        &self,
        record: &AssetLockRecord,
        claim: &ClaimInfo,
        claimant: &Identity,
    ) -> Result<(), AssetExchangeError> {
        if &record.recipient != claimant {
            return Err(rejected("claimant is not the lock's recipient"));
        }
        let now = self.now_secs();
        if record.lock_info.reclaim_allowed(now) {
            return Err(rejected("lock has expired"));
        }
        if !record.lock_info.verify_claim(claim, now) {
            return Err(rejected("preimage does not hash to the stored digest"));
        }
        Ok(())
    }
}
