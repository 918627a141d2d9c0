//! # Asset Exchange
//!
//! HTLC-based conditional transfers over a shared key-value ledger.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Let a holder atomically commit an asset to a counterparty claim that is
//! redeemable only by presenting a secret preimage matching a stored hash
//! before an expiry deadline, and otherwise reclaimable by the original
//! holder after expiry. Two asset classes are supported: uniquely
//! identified bonds and fungible token pools. This is the ledger-side half
//! of a cross-ledger atomic swap: the secret revealed by a claim here
//! enables the matching claim on the counterpart ledger.
//!
//! ## Module Structure
//!
//! ```text
//! asset-exchange/
//! ├── domain/      # Agreements, lock records, mechanism rules, errors
//! ├── algorithms/  # Contract ids, hash-lock helpers, payload validation
//! ├── ports/       # AssetExchangeApi, LedgerStore, bookkeeping traits
//! ├── adapters/    # In-memory ports for tests and local runs
//! ├── service/     # Lock/Claim/Unlock/Query managers + lookup index
//! └── payloads     # Cross-system wire messages and builders
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod payloads;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{
    bond_contract_id, create_hash_lock, fungible_contract_id, generate_random_preimage,
    parse_asset_agreement, parse_claim_info, parse_fungible_agreement, parse_lock_info,
    verify_preimage, DEFAULT_PREIMAGE_LEN,
};
pub use config::ExchangeConfig;
pub use domain::{
    AssetExchangeAgreement, AssetExchangeError, AssetLockRecord, BondAsset, ClaimInfo, ContractId,
    ContractedAsset, FungibleAssetExchangeAgreement, HtlcClaim, HtlcLock, Identity, LockInfo,
    LockMechanism, StoreError,
};
pub use ports::{
    AssetExchangeApi, BondRegistry, CallerIdentity, LedgerStore, SystemTimeSource, TimeSource,
    TokenLedger,
};
pub use service::AssetExchangeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
