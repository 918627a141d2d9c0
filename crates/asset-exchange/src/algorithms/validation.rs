//! # Payload Validation
//!
//! Decodes opaque payload strings and checks structural well-formedness,
//! yielding canonical typed records. Performs no ledger access; repeated
//! validation of the same payload always yields the same result.

use crate::domain::{
    invariant_units_positive, AssetExchangeAgreement, AssetExchangeError, ClaimInfo,
    FungibleAssetExchangeAgreement, HtlcClaim, HtlcLock, Identity, LockInfo,
};
use crate::payloads::{
    AssetClaimHtlcMsg, AssetClaimMsg, AssetExchangeAgreementMsg, AssetLockHtlcMsg, AssetLockMsg,
    FungibleAssetExchangeAgreementMsg, LOCK_MECHANISM_HTLC,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::de::DeserializeOwned;

fn malformed(field: &'static str, reason: impl ToString) -> AssetExchangeError {
    AssetExchangeError::MalformedInput {
        field,
        reason: reason.to_string(),
    }
}

fn decode_transport<T: DeserializeOwned>(
    payload: &str,
    field: &'static str,
) -> Result<T, AssetExchangeError> {
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| malformed(field, format!("invalid base64 transport: {e}")))?;
    bincode::deserialize(&bytes).map_err(|e| malformed(field, format!("undecodable body: {e}")))
}

fn decode_inner_base64(text: &[u8], field: &'static str) -> Result<Vec<u8>, AssetExchangeError> {
    let bytes = BASE64
        .decode(text)
        .map_err(|e| malformed(field, format!("invalid base64: {e}")))?;
    if bytes.is_empty() {
        return Err(malformed(field, "must not be empty"));
    }
    Ok(bytes)
}

/// Decode and validate a bond exchange agreement payload.
pub fn parse_asset_agreement(payload: &str) -> Result<AssetExchangeAgreement, AssetExchangeError> {
    let msg: AssetExchangeAgreementMsg = decode_transport(payload, "asset_agreement")?;
    if msg.asset_type.is_empty() {
        return Err(malformed("asset_type", "must not be empty"));
    }
    if msg.id.is_empty() {
        return Err(malformed("id", "must not be empty"));
    }
    Ok(AssetExchangeAgreement {
        asset_type: msg.asset_type,
        id: msg.id,
        locker: Identity::new(msg.locker),
        recipient: Identity::new(msg.recipient),
    })
}

/// Decode and validate a fungible exchange agreement payload.
pub fn parse_fungible_agreement(
    payload: &str,
) -> Result<FungibleAssetExchangeAgreement, AssetExchangeError> {
    let msg: FungibleAssetExchangeAgreementMsg = decode_transport(payload, "fungible_agreement")?;
    if msg.asset_type.is_empty() {
        return Err(malformed("asset_type", "must not be empty"));
    }
    if !invariant_units_positive(msg.num_units) {
        return Err(malformed("num_units", "must be positive"));
    }
    Ok(FungibleAssetExchangeAgreement {
        asset_type: msg.asset_type,
        num_units: msg.num_units,
        locker: Identity::new(msg.locker),
        recipient: Identity::new(msg.recipient),
    })
}

/// Decode and validate a lock descriptor payload.
pub fn parse_lock_info(payload: &str) -> Result<LockInfo, AssetExchangeError> {
    let msg: AssetLockMsg = decode_transport(payload, "lock_info")?;
    if msg.mechanism != LOCK_MECHANISM_HTLC {
        return Err(malformed(
            "mechanism",
            format!("unrecognized lock mechanism tag {}", msg.mechanism),
        ));
    }
    let body: AssetLockHtlcMsg = bincode::deserialize(&msg.lock_info)
        .map_err(|e| malformed("lock_info", format!("undecodable HTLC body: {e}")))?;
    let hash_digest = decode_inner_base64(&body.hash_base64, "hash_base64")?;
    Ok(LockInfo::Htlc(HtlcLock {
        hash_digest,
        expiry_time_secs: body.expiry_time_secs,
    }))
}

/// Decode and validate a claim descriptor payload.
pub fn parse_claim_info(payload: &str) -> Result<ClaimInfo, AssetExchangeError> {
    let msg: AssetClaimMsg = decode_transport(payload, "claim_info")?;
    if msg.mechanism != LOCK_MECHANISM_HTLC {
        return Err(malformed(
            "mechanism",
            format!("unrecognized lock mechanism tag {}", msg.mechanism),
        ));
    }
    let body: AssetClaimHtlcMsg = bincode::deserialize(&msg.claim_info)
        .map_err(|e| malformed("claim_info", format!("undecodable HTLC body: {e}")))?;
    let hash_preimage = decode_inner_base64(&body.hash_preimage_base64, "hash_preimage_base64")?;
    Ok(ClaimInfo::Htlc(HtlcClaim { hash_preimage }))
}
