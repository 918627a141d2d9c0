//! # Hash Lock Helpers
//!
//! Client-side cryptographic operations for HTLC secrets. The exchange
//! itself only verifies; these helpers exist for lockers preparing a
//! hash lock and for tests.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Default preimage length used by counterpart SDKs.
pub const DEFAULT_PREIMAGE_LEN: usize = 20;

/// Generate a cryptographically secure random preimage.
pub fn generate_random_preimage(len: usize) -> Vec<u8> {
    let mut preimage = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut preimage);
    preimage
}

/// Create a hash digest from a preimage using SHA-256.
pub fn create_hash_lock(preimage: &[u8]) -> Vec<u8> {
    Sha256::digest(preimage).to_vec()
}

/// Verify that a preimage matches a hash digest.
pub fn verify_preimage(preimage: &[u8], hash_digest: &[u8]) -> bool {
    create_hash_lock(preimage).as_slice() == hash_digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_preimage_len() {
        assert_eq!(
            generate_random_preimage(DEFAULT_PREIMAGE_LEN).len(),
            DEFAULT_PREIMAGE_LEN
        );
    }

    #[test]
    fn test_generate_random_preimage_unique() {
        assert_ne!(generate_random_preimage(32), generate_random_preimage(32));
    }

    #[test]
    fn test_create_hash_lock_deterministic() {
        assert_eq!(create_hash_lock(b"secret"), create_hash_lock(b"secret"));
    }

    #[test]
    fn test_verify_preimage_round_trip() {
        let preimage = generate_random_preimage(DEFAULT_PREIMAGE_LEN);
        let digest = create_hash_lock(&preimage);
        assert!(verify_preimage(&preimage, &digest));
        assert!(!verify_preimage(b"wrong", &digest));
    }
}
