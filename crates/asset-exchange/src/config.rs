//! # Exchange Configuration
//!
//! Ledger key-namespace prefixes. Multiple applications can share one
//! ledger as long as their prefixes differ.

use serde::{Deserialize, Serialize};

/// Key-namespace configuration for the exchange.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Prefix for bond lock records (keyed by asset type + id).
    pub bond_lock_prefix: String,
    /// Prefix for fungible lock records (keyed by contract id).
    pub fungible_lock_prefix: String,
    /// Prefix for contract-id to asset lookup entries.
    pub contract_lookup_prefix: String,
    /// Prefix for bond asset to contract-id lookup entries.
    pub asset_lookup_prefix: String,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            bond_lock_prefix: "AssetExchangeContract".to_string(),
            fungible_lock_prefix: "FungibleAssetExchangeContract".to_string(),
            contract_lookup_prefix: "ContractIdAssetLookup".to_string(),
            asset_lookup_prefix: "AssetContractIdLookup".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes_are_distinct() {
        let config = ExchangeConfig::default();
        let prefixes = [
            &config.bond_lock_prefix,
            &config.fungible_lock_prefix,
            &config.contract_lookup_prefix,
            &config.asset_lookup_prefix,
        ];
        for (i, a) in prefixes.iter().enumerate() {
            for b in prefixes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
