//! # Algorithms Module
//!
//! Contract identity generation, hash-lock helpers, and payload validation.

pub mod contract_id;
pub mod hash_lock;
pub mod validation;

pub use contract_id::{bond_contract_id, fungible_contract_id};
pub use hash_lock::{
    create_hash_lock, generate_random_preimage, verify_preimage, DEFAULT_PREIMAGE_LEN,
};
pub use validation::{
    parse_asset_agreement, parse_claim_info, parse_fungible_agreement, parse_lock_info,
};
