//! # Wire Payloads
//!
//! Message structs for the cross-system payload schema, plus client-side
//! builders mirroring what counterpart SDKs submit.
//!
//! Every operation parameter travels as base64 text wrapping a
//! binary-serialized message. The exchange depends only on the logical
//! fields; the binary body here is bincode.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Mechanism tag for Hash-Time-Locked Contracts.
pub const LOCK_MECHANISM_HTLC: i32 = 0;

/// Wire form of a bond exchange agreement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetExchangeAgreementMsg {
    /// Asset class.
    pub asset_type: String,
    /// Unique asset identifier.
    pub id: String,
    /// Locker credential; may be empty and filled from the caller.
    pub locker: String,
    /// Recipient credential; may be empty and filled from the caller.
    pub recipient: String,
}

/// Wire form of a fungible exchange agreement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungibleAssetExchangeAgreementMsg {
    /// Token type.
    pub asset_type: String,
    /// Number of units.
    pub num_units: u64,
    /// Locker credential; may be empty and filled from the caller.
    pub locker: String,
    /// Recipient credential; may be empty and filled from the caller.
    pub recipient: String,
}

/// Mechanism-tagged lock descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLockMsg {
    /// Lock mechanism tag; see [`LOCK_MECHANISM_HTLC`].
    pub mechanism: i32,
    /// Mechanism-specific body, binary-serialized.
    pub lock_info: Vec<u8>,
}

/// HTLC lock body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLockHtlcMsg {
    /// Base64 text of the hash digest bytes.
    pub hash_base64: Vec<u8>,
    /// Absolute Unix expiry time.
    pub expiry_time_secs: u64,
}

/// Mechanism-tagged claim descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetClaimMsg {
    /// Lock mechanism tag; see [`LOCK_MECHANISM_HTLC`].
    pub mechanism: i32,
    /// Mechanism-specific body, binary-serialized.
    pub claim_info: Vec<u8>,
}

/// HTLC claim body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetClaimHtlcMsg {
    /// Base64 text of the revealed preimage bytes.
    pub hash_preimage_base64: Vec<u8>,
}

fn encode<T: Serialize>(msg: &T) -> String {
    // bincode of a struct of owned fields cannot fail
    let bytes = bincode::serialize(msg).unwrap_or_default();
    BASE64.encode(bytes)
}

/// Serialize a bond exchange agreement the way counterpart SDKs do.
pub fn encode_asset_agreement(asset_type: &str, id: &str, recipient: &str, locker: &str) -> String {
    encode(&AssetExchangeAgreementMsg {
        asset_type: asset_type.to_string(),
        id: id.to_string(),
        locker: locker.to_string(),
        recipient: recipient.to_string(),
    })
}

/// Serialize a fungible exchange agreement.
pub fn encode_fungible_agreement(
    asset_type: &str,
    num_units: u64,
    recipient: &str,
    locker: &str,
) -> String {
    encode(&FungibleAssetExchangeAgreementMsg {
        asset_type: asset_type.to_string(),
        num_units,
        locker: locker.to_string(),
        recipient: recipient.to_string(),
    })
}

/// Serialize HTLC lock terms from a raw hash digest and expiry.
pub fn encode_htlc_lock(hash_digest: &[u8], expiry_time_secs: u64) -> String {
    let body = AssetLockHtlcMsg {
        hash_base64: BASE64.encode(hash_digest).into_bytes(),
        expiry_time_secs,
    };
    encode(&AssetLockMsg {
        mechanism: LOCK_MECHANISM_HTLC,
        lock_info: bincode::serialize(&body).unwrap_or_default(),
    })
}

/// Serialize HTLC claim evidence from a raw preimage.
pub fn encode_htlc_claim(hash_preimage: &[u8]) -> String {
    let body = AssetClaimHtlcMsg {
        hash_preimage_base64: BASE64.encode(hash_preimage).into_bytes(),
    };
    encode(&AssetClaimMsg {
        mechanism: LOCK_MECHANISM_HTLC,
        claim_info: bincode::serialize(&body).unwrap_or_default(),
    })
}
