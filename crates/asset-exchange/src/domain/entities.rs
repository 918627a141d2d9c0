//! # Domain Entities
//!
//! Core entities for the asset exchange protocol.

use super::value_objects::{Identity, LockInfo};
use serde::{Deserialize, Serialize};

/// Agreement to exchange a single uniquely identified (bond) asset.
///
/// Invocation-scoped; never persisted verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetExchangeAgreement {
    /// Asset class, e.g. a bond series.
    pub asset_type: String,
    /// Unique asset identifier within the class.
    pub id: String,
    /// Party placing the lock.
    pub locker: Identity,
    /// Party entitled to claim.
    pub recipient: Identity,
}

/// Agreement to exchange a quantity of fungible units of one type.
///
/// No specific unit identities are involved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungibleAssetExchangeAgreement {
    /// Token type.
    pub asset_type: String,
    /// Number of units to lock. Always positive.
    pub num_units: u64,
    /// Party placing the lock.
    pub locker: Identity,
    /// Party entitled to claim.
    pub recipient: Identity,
}

/// Persisted lock record.
///
/// Keyed by the asset identity (bond) or contract id (fungible pool);
/// existence of the record for a key is itself the "locked" state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLockRecord {
    /// Party that placed the lock and may reclaim after expiry.
    pub locker: Identity,
    /// Party entitled to claim before expiry.
    pub recipient: Identity,
    /// Mechanism-tagged lock terms.
    pub lock_info: LockInfo,
}

/// Asset identity a contract id resolves to through the lookup index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractedAsset {
    /// A single bond asset.
    Bond {
        /// Asset class.
        asset_type: String,
        /// Unique asset identifier.
        id: String,
    },
    /// A fungible pool.
    Fungible {
        /// Token type.
        asset_type: String,
        /// Units committed to the pool.
        num_units: u64,
    },
}

/// Bond asset as surfaced by the external registry.
///
/// Referenced, not owned: existence, ownership, and maturity bookkeeping
/// live outside the exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondAsset {
    /// Asset class.
    pub asset_type: String,
    /// Unique asset identifier.
    pub id: String,
    /// Current owner.
    pub owner: Identity,
    /// Absolute Unix time at which the bond matures.
    pub maturity_time_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::HtlcLock;

    fn test_record() -> AssetLockRecord {
        AssetLockRecord {
            locker: Identity::from("locker-cert"),
            recipient: Identity::from("recipient-cert"),
            lock_info: LockInfo::Htlc(HtlcLock {
                hash_digest: vec![0xAB; 32],
                expiry_time_secs: 2000,
            }),
        }
    }

    #[test]
    fn test_lock_record_round_trips_through_bincode() {
        let record = test_record();
        let bytes = bincode::serialize(&record).unwrap();
        let decoded: AssetLockRecord = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_contracted_asset_variants_encode_distinctly() {
        let bond = ContractedAsset::Bond {
            asset_type: "B1".to_string(),
            id: "bond42".to_string(),
        };
        let pool = ContractedAsset::Fungible {
            asset_type: "TOK".to_string(),
            num_units: 100,
        };
        assert_ne!(
            bincode::serialize(&bond).unwrap(),
            bincode::serialize(&pool).unwrap()
        );
    }
}
