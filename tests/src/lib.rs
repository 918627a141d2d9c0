//! # Asset-Exchange Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Full exchange lifecycles over the contract surface
//!     ├── bond_exchange.rs
//!     └── fungible_exchange.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ax-tests
//!
//! # By scenario
//! cargo test -p ax-tests integration::bond_exchange
//! cargo test -p ax-tests integration::fungible_exchange
//! ```

pub mod integration;
