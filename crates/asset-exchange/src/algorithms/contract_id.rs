//! # Contract Identity Generation
//!
//! Derives the deterministic identifier that names a lock independently of
//! the underlying asset identity. Both sides of a cross-ledger swap compute
//! it from the agreement alone, so no prior coordination is needed.

use crate::domain::{
    AssetExchangeAgreement, ContractId, FungibleAssetExchangeAgreement, LockInfo,
};
use sha2::{Digest, Sha256};

// Domain-separation labels; variable-length fields are length-prefixed so
// adjacent fields cannot alias.
const BOND_CONTRACT_TAG: &[u8] = b"asset-exchange/bond";
const FUNGIBLE_CONTRACT_TAG: &[u8] = b"asset-exchange/fungible";

fn absorb(hasher: &mut Sha256, field: &[u8]) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field);
}

/// Contract id for a bond agreement.
pub fn bond_contract_id(agreement: &AssetExchangeAgreement) -> ContractId {
    let mut hasher = Sha256::new();
    hasher.update(BOND_CONTRACT_TAG);
    absorb(&mut hasher, agreement.asset_type.as_bytes());
    absorb(&mut hasher, agreement.id.as_bytes());
    absorb(&mut hasher, agreement.locker.as_str().as_bytes());
    absorb(&mut hasher, agreement.recipient.as_str().as_bytes());
    ContractId::from_digest(hasher.finalize().into())
}

/// Contract id for a fungible agreement.
///
/// Absorbs the lock terms as well, so distinct pools between the same
/// parties get distinct identifiers.
pub fn fungible_contract_id(
    agreement: &FungibleAssetExchangeAgreement,
    lock_info: &LockInfo,
) -> ContractId {
    let mut hasher = Sha256::new();
    hasher.update(FUNGIBLE_CONTRACT_TAG);
    absorb(&mut hasher, agreement.asset_type.as_bytes());
    hasher.update(agreement.num_units.to_le_bytes());
    absorb(&mut hasher, agreement.locker.as_str().as_bytes());
    absorb(&mut hasher, agreement.recipient.as_str().as_bytes());
    match lock_info {
        LockInfo::Htlc(terms) => {
            absorb(&mut hasher, &terms.hash_digest);
            hasher.update(terms.expiry_time_secs.to_le_bytes());
        }
    }
    ContractId::from_digest(hasher.finalize().into())
}
