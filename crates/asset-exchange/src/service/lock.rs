//! # Lock Manager
//!
//! Places a lock on a bond asset or a pool of fungible units, enforcing
//! single-active-lock and the asset-class preconditions.

use super::AssetExchangeService;
use crate::algorithms::{
    bond_contract_id, fungible_contract_id, parse_asset_agreement, parse_fungible_agreement,
    parse_lock_info,
};
use crate::domain::{
    invariant_maturity_covers_expiry, AssetExchangeAgreement, AssetExchangeError, AssetLockRecord,
    BondAsset, Identity, LockInfo,
};
use tracing::info;

impl AssetExchangeService {
    /// Lock a bond asset under an exchange agreement.
    ///
    /// Returns the generated contract id.
    pub fn lock_asset(
        &self,
        agreement_payload: &str,
        lock_payload: &str,
    ) -> Result<String, AssetExchangeError> {
        const OP: &str = "lock_asset";

        let mut agreement = parse_asset_agreement(agreement_payload)?;
        let lock_info = parse_lock_info(lock_payload)?;
        let caller = self.current_caller();
        normalize_locker(OP, &mut agreement.locker, &caller)?;
        require_recipient(&agreement.recipient)?;

        self.bond_lock_preconditions(OP, &agreement, &lock_info)?;

        let key = self.bond_lock_key(&agreement.asset_type, &agreement.id);
        if self.read_record(OP, &key)?.is_some() {
            return Err(AssetExchangeError::AlreadyLocked {
                asset: format!("{}:{}", agreement.asset_type, agreement.id),
            });
        }

        let contract_id = bond_contract_id(&agreement);
        let record = AssetLockRecord {
            locker: agreement.locker.clone(),
            recipient: agreement.recipient.clone(),
            lock_info,
        };
        self.put_record(OP, &key, &record)?;
        self.create_bond_lookup(OP, &contract_id, &agreement.asset_type, &agreement.id)?;

        info!(
            "[asset-exchange] locked bond {}:{} under contract {}",
            agreement.asset_type, agreement.id, contract_id
        );
        Ok(contract_id.to_string())
    }

    /// Lock a pool of fungible units under an exchange agreement.
    ///
    /// Returns the generated contract id.
    pub fn lock_fungible_asset(
        &self,
        agreement_payload: &str,
        lock_payload: &str,
    ) -> Result<String, AssetExchangeError> {
        const OP: &str = "lock_fungible_asset";

        let mut agreement = parse_fungible_agreement(agreement_payload)?;
        let lock_info = parse_lock_info(lock_payload)?;
        let caller = self.current_caller();
        normalize_locker(OP, &mut agreement.locker, &caller)?;
        require_recipient(&agreement.recipient)?;

        let balance = self
            .tokens
            .balance_of(&agreement.asset_type, &agreement.locker)
            .map_err(|e| AssetExchangeError::store(OP, e))?;
        if balance < agreement.num_units {
            return Err(AssetExchangeError::precondition(
                OP,
                format!(
                    "locker holds {balance} units of {}, needs {}",
                    agreement.asset_type, agreement.num_units
                ),
            ));
        }

        let contract_id = fungible_contract_id(&agreement, &lock_info);
        let key = self.fungible_lock_key(&contract_id);
        if self.read_record(OP, &key)?.is_some() {
            return Err(AssetExchangeError::AlreadyLocked {
                asset: format!("{} x{} (contract {contract_id})", agreement.asset_type, agreement.num_units),
            });
        }

        let record = AssetLockRecord {
            locker: agreement.locker.clone(),
            recipient: agreement.recipient.clone(),
            lock_info,
        };
        self.put_record(OP, &key, &record)?;

        // The pool is debited before the lookup entry is written; a failure
        // between the two leaves the debit in place for the operator to
        // reconcile.
        self.tokens
            .debit(
                &agreement.asset_type,
                &agreement.locker,
                agreement.num_units,
            )
            .map_err(|e| AssetExchangeError::store(OP, e))?;
        self.create_fungible_lookup(
            OP,
            &contract_id,
            &agreement.asset_type,
            agreement.num_units,
        )?;

        info!(
            "[asset-exchange] locked {} units of {} under contract {}",
            agreement.num_units, agreement.asset_type, contract_id
        );
        Ok(contract_id.to_string())
    }

    /// Bond-specific lock preconditions: the asset exists, is owned by the
    /// locker, and stays a valid bond for the whole lock window.
    fn bond_lock_preconditions(
        &self,
        operation: &'static str,
        agreement: &AssetExchangeAgreement,
        lock_info: &LockInfo,
    ) -> Result<(), AssetExchangeError> {
        let bond: Option<BondAsset> = self
            .bonds
            .read_bond(&agreement.asset_type, &agreement.id)
            .map_err(|e| AssetExchangeError::store(operation, e))?;
        let bond = bond.ok_or_else(|| {
            AssetExchangeError::precondition(
                operation,
                format!("no bond asset {}:{}", agreement.asset_type, agreement.id),
            )
        })?;

        if bond.owner != agreement.locker {
            return Err(AssetExchangeError::precondition(
                operation,
                format!(
                    "bond {}:{} is not owned by the locker",
                    agreement.asset_type, agreement.id
                ),
            ));
        }

        if !invariant_maturity_covers_expiry(bond.maturity_time_secs, lock_info.expiry_time_secs())
        {
            return Err(AssetExchangeError::precondition(
                operation,
                format!(
                    "bond {}:{} matures at {} before lock expiry {}",
                    agreement.asset_type,
                    agreement.id,
                    bond.maturity_time_secs,
                    lock_info.expiry_time_secs()
                ),
            ));
        }

        Ok(())
    }
}

/// Fill an empty locker field from the transaction creator; a non-empty
/// locker must be the creator.
fn normalize_locker(
    operation: &'static str,
    locker: &mut Identity,
    caller: &Identity,
) -> Result<(), AssetExchangeError> {
    if locker.is_empty() {
        *locker = caller.clone();
    } else if locker != caller {
        return Err(AssetExchangeError::precondition(
            operation,
            "locker does not match the transaction creator",
        ));
    }
    Ok(())
}

fn require_recipient(recipient: &Identity) -> Result<(), AssetExchangeError> {
    if recipient.is_empty() {
        return Err(AssetExchangeError::MalformedInput {
            field: "recipient",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
