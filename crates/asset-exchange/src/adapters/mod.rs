//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports, substitutable for the
//! real ledger and bookkeeping collaborators in tests.

mod bookkeeping;
mod memory_ledger;

pub use bookkeeping::{InMemoryBondRegistry, InMemoryTokenLedger};
pub use memory_ledger::{FixedTimeSource, InMemoryLedgerStore, StaticCaller};
