//! # Domain Value Objects
//!
//! Immutable value types for the asset exchange protocol.

use super::invariants::{
    invariant_claim_window_open, invariant_preimage_matches, invariant_reclaim_window_open,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque caller credential, as issued by the external membership layer.
///
/// The exchange never inspects the credential; it only compares identities
/// for equality when checking locker/recipient roles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wrap an encoded credential string.
    pub fn new(credential: impl Into<String>) -> Self {
        Self(credential.into())
    }

    /// The encoded credential.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if no credential was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Identity {
    fn from(credential: &str) -> Self {
        Self(credential.to_string())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic identifier of a lock, independent of the asset identity.
///
/// Hex rendering of a SHA-256 digest over the canonical agreement fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(String);

impl ContractId {
    /// Wrap an already-rendered identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Render a raw digest as an identifier.
    pub fn from_digest(digest: [u8; 32]) -> Self {
        Self(hex::encode(digest))
    }

    /// The rendered identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lock mechanism tag. Closed set; future non-HTLC mechanisms become
/// additional variants here and in [`LockInfo`]/[`ClaimInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockMechanism {
    /// Hash-Time-Locked Contract.
    Htlc,
}

/// HTLC lock terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtlcLock {
    /// Digest the claim preimage must hash to. Opaque bytes.
    pub hash_digest: Vec<u8>,
    /// Absolute Unix time after which the locker may reclaim.
    pub expiry_time_secs: u64,
}

/// Mechanism-tagged lock terms stored inside a lock record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockInfo {
    /// Hash-Time-Locked Contract terms.
    Htlc(HtlcLock),
}

/// HTLC claim evidence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtlcClaim {
    /// Revealed preimage. Opaque bytes.
    pub hash_preimage: Vec<u8>,
}

/// Mechanism-tagged claim evidence supplied by a claimant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimInfo {
    /// Hash-Time-Locked Contract evidence.
    Htlc(HtlcClaim),
}

impl LockInfo {
    /// The mechanism this lock was placed under.
    pub fn mechanism(&self) -> LockMechanism {
        match self {
            LockInfo::Htlc(_) => LockMechanism::Htlc,
        }
    }

    /// Absolute expiry of the lock.
    pub fn expiry_time_secs(&self) -> u64 {
        match self {
            LockInfo::Htlc(terms) => terms.expiry_time_secs,
        }
    }

    /// Verify claim evidence against these lock terms.
    ///
    /// The claim's mechanism must match the lock's; for HTLC the revealed
    /// preimage must hash byte-exactly to the stored digest and the claim
    /// window must still be open at `now_secs`.
    pub fn verify_claim(&self, claim: &ClaimInfo, now_secs: u64) -> bool {
        match (self, claim) {
            (LockInfo::Htlc(terms), ClaimInfo::Htlc(evidence)) => {
                invariant_claim_window_open(now_secs, terms.expiry_time_secs)
                    && invariant_preimage_matches(&evidence.hash_preimage, &terms.hash_digest)
            }
        }
    }

    /// True once the locker may reclaim the asset.
    pub fn reclaim_allowed(&self, now_secs: u64) -> bool {
        match self {
            LockInfo::Htlc(terms) => invariant_reclaim_window_open(now_secs, terms.expiry_time_secs),
        }
    }
}
