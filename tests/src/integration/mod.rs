//! Cross-component exchange scenarios driven through the inbound port.

pub mod bond_exchange;
pub mod fungible_exchange;

#[cfg(test)]
pub(crate) mod fixtures {
    use asset_exchange::adapters::{
        FixedTimeSource, InMemoryBondRegistry, InMemoryLedgerStore, InMemoryTokenLedger,
        StaticCaller,
    };
    use asset_exchange::{AssetExchangeApi, AssetExchangeService};
    use std::sync::Arc;

    /// The two parties used across scenarios.
    pub const ALICE: &str = "alice-cert";
    /// Counterparty credential.
    pub const BOB: &str = "bob-cert";

    /// A service wired to fresh in-memory collaborators, with handles kept
    /// so scenarios can steer identity, time, and bookkeeping directly.
    pub struct Ledger {
        /// Service under test, held as the invocable contract surface.
        pub service: Arc<dyn AssetExchangeApi>,
        /// Keyed store behind the service.
        pub store: Arc<InMemoryLedgerStore>,
        /// Bond ownership registry.
        pub bonds: Arc<InMemoryBondRegistry>,
        /// Fungible holdings.
        pub tokens: Arc<InMemoryTokenLedger>,
        /// Acting transaction creator.
        pub caller: Arc<StaticCaller>,
        /// Transaction-submission clock.
        pub clock: Arc<FixedTimeSource>,
    }

    /// Fresh ledger at T=1000 with Alice acting.
    pub fn ledger() -> Ledger {
        let store = Arc::new(InMemoryLedgerStore::new());
        let bonds = Arc::new(InMemoryBondRegistry::new());
        let tokens = Arc::new(InMemoryTokenLedger::new());
        let caller = Arc::new(StaticCaller::new(ALICE));
        let clock = Arc::new(FixedTimeSource::new(1000));
        let service: Arc<dyn AssetExchangeApi> = Arc::new(AssetExchangeService::new(
            store.clone(),
            bonds.clone(),
            tokens.clone(),
            caller.clone(),
            clock.clone(),
        ));
        Ledger {
            service,
            store,
            bonds,
            tokens,
            caller,
            clock,
        }
    }
}
