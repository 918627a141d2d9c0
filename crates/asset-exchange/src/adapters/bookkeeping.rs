//! In-memory asset and token-supply bookkeeping adapters.
//!
//! Stand-ins for the external ownership/supply modules the exchange calls
//! into once per protocol step.

use crate::domain::{BondAsset, Identity, StoreError};
use crate::ports::{BondRegistry, TokenLedger};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory bond registry.
#[derive(Default)]
pub struct InMemoryBondRegistry {
    bonds: RwLock<HashMap<(String, String), BondAsset>>,
}

impl InMemoryBondRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bond.
    pub fn add_bond(&self, bond: BondAsset) {
        self.bonds
            .write()
            .insert((bond.asset_type.clone(), bond.id.clone()), bond);
    }

    /// Current owner of a bond, if it exists.
    pub fn owner_of(&self, asset_type: &str, id: &str) -> Option<Identity> {
        self.bonds
            .read()
            .get(&(asset_type.to_string(), id.to_string()))
            .map(|bond| bond.owner.clone())
    }
}

impl BondRegistry for InMemoryBondRegistry {
    fn read_bond(&self, asset_type: &str, id: &str) -> Result<Option<BondAsset>, StoreError> {
        Ok(self
            .bonds
            .read()
            .get(&(asset_type.to_string(), id.to_string()))
            .cloned())
    }

    fn update_owner(
        &self,
        asset_type: &str,
        id: &str,
        new_owner: &Identity,
    ) -> Result<(), StoreError> {
        let mut bonds = self.bonds.write();
        let bond = bonds
            .get_mut(&(asset_type.to_string(), id.to_string()))
            .ok_or_else(|| StoreError::new(format!("no bond {asset_type}:{id}")))?;
        bond.owner = new_owner.clone();
        Ok(())
    }
}

/// In-memory fungible token ledger.
#[derive(Default)]
pub struct InMemoryTokenLedger {
    holdings: RwLock<HashMap<(String, Identity), u64>>,
}

impl InMemoryTokenLedger {
    /// Create an empty token ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an owner's holdings.
    pub fn mint(&self, asset_type: &str, owner: &Identity, num_units: u64) {
        *self
            .holdings
            .write()
            .entry((asset_type.to_string(), owner.clone()))
            .or_insert(0) += num_units;
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn balance_of(&self, asset_type: &str, owner: &Identity) -> Result<u64, StoreError> {
        Ok(*self
            .holdings
            .read()
            .get(&(asset_type.to_string(), owner.clone()))
            .unwrap_or(&0))
    }

    fn debit(&self, asset_type: &str, owner: &Identity, num_units: u64) -> Result<(), StoreError> {
        let mut holdings = self.holdings.write();
        let balance = holdings
            .entry((asset_type.to_string(), owner.clone()))
            .or_insert(0);
        if *balance < num_units {
            return Err(StoreError::new(format!(
                "insufficient {asset_type} balance: {} < {num_units}",
                *balance
            )));
        }
        *balance -= num_units;
        Ok(())
    }

    fn credit(&self, asset_type: &str, owner: &Identity, num_units: u64) -> Result<(), StoreError> {
        *self
            .holdings
            .write()
            .entry((asset_type.to_string(), owner.clone()))
            .or_insert(0) += num_units;
        Ok(())
    }
}
