//! # Inbound Port
//!
//! The invocable contract surface of the asset exchange.
//!
//! Every operation runs inside a single externally supplied ledger
//! transaction; string parameters are base64 payloads in the cross-system
//! wire schema (see [`crate::payloads`]).

use crate::domain::AssetExchangeError;

/// Asset exchange API - inbound port.
pub trait AssetExchangeApi: Send + Sync {
    /// Lock a bond asset under an exchange agreement.
    ///
    /// Returns the generated contract id.
    fn lock_asset(
        &self,
        agreement_payload: &str,
        lock_payload: &str,
    ) -> Result<String, AssetExchangeError>;

    /// Lock a pool of fungible units under an exchange agreement.
    ///
    /// Returns the generated contract id.
    fn lock_fungible_asset(
        &self,
        agreement_payload: &str,
        lock_payload: &str,
    ) -> Result<String, AssetExchangeError>;

    /// Whether a live lock exists for the agreement's bond asset.
    fn is_asset_locked(&self, agreement_payload: &str) -> Result<bool, AssetExchangeError>;

    /// Whether a live bond lock exists for the contract id.
    fn is_asset_locked_query_using_contract_id(
        &self,
        contract_id: &str,
    ) -> Result<bool, AssetExchangeError>;

    /// Whether a live fungible lock exists for the contract id.
    fn is_fungible_asset_locked(&self, contract_id: &str) -> Result<bool, AssetExchangeError>;

    /// Claim a locked bond asset by re-supplying the original agreement.
    fn claim_asset(
        &self,
        agreement_payload: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError>;

    /// Claim a locked bond asset addressed by contract id.
    fn claim_asset_using_contract_id(
        &self,
        contract_id: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError>;

    /// Claim a locked fungible pool addressed by contract id.
    fn claim_fungible_asset(
        &self,
        contract_id: &str,
        claim_payload: &str,
    ) -> Result<bool, AssetExchangeError>;

    /// Reclaim an expired bond lock by re-supplying the original agreement.
    fn unlock_asset(&self, agreement_payload: &str) -> Result<bool, AssetExchangeError>;

    /// Reclaim an expired bond lock addressed by contract id.
    fn unlock_bond_asset_using_contract_id(
        &self,
        contract_id: &str,
    ) -> Result<bool, AssetExchangeError>;

    /// Reclaim an expired fungible lock addressed by contract id.
    fn unlock_fungible_asset(&self, contract_id: &str) -> Result<bool, AssetExchangeError>;
}
