//! # Domain Invariants
//!
//! Business rules for the asset exchange protocol.

use sha2::{Digest, Sha256};

/// Invariant: a revealed preimage must hash byte-exactly to the stored digest.
pub fn invariant_preimage_matches(preimage: &[u8], hash_digest: &[u8]) -> bool {
    Sha256::digest(preimage).as_slice() == hash_digest
}

/// Invariant: claims are accepted only while the lock has not expired.
pub fn invariant_claim_window_open(now_secs: u64, expiry_time_secs: u64) -> bool {
    now_secs <= expiry_time_secs
}

/// Invariant: reclaims are accepted only after the lock has expired.
pub fn invariant_reclaim_window_open(now_secs: u64, expiry_time_secs: u64) -> bool {
    now_secs > expiry_time_secs
}

/// Invariant: a locked bond must still be a valid bond for the whole lock
/// window, so its maturity must not occur before the lock's expiry.
pub fn invariant_maturity_covers_expiry(maturity_time_secs: u64, expiry_time_secs: u64) -> bool {
    maturity_time_secs >= expiry_time_secs
}

/// Invariant: fungible agreements carry a positive unit count.
pub fn invariant_units_positive(num_units: u64) -> bool {
    num_units > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn test_preimage_matches() {
        let digest = Sha256::digest(b"secret").to_vec();
        assert!(invariant_preimage_matches(b"secret", &digest));
    }

    #[test]
    fn test_preimage_mismatch() {
        let digest = Sha256::digest(b"secret").to_vec();
        assert!(!invariant_preimage_matches(b"other", &digest));
    }

    #[test]
    fn test_preimage_rejects_truncated_digest() {
        let digest = Sha256::digest(b"secret");
        assert!(!invariant_preimage_matches(b"secret", &digest[..16]));
    }

    #[test]
    fn test_claim_and_reclaim_windows_partition_time() {
        for now in [0, 1999, 2000, 2001, 5000] {
            assert_ne!(
                invariant_claim_window_open(now, 2000),
                invariant_reclaim_window_open(now, 2000)
            );
        }
    }

    #[test]
    fn test_maturity_covers_expiry() {
        assert!(invariant_maturity_covers_expiry(3000, 2000));
        assert!(invariant_maturity_covers_expiry(2000, 2000));
        assert!(!invariant_maturity_covers_expiry(1999, 2000));
    }

    #[test]
    fn test_units_positive() {
        assert!(invariant_units_positive(1));
        assert!(!invariant_units_positive(0));
    }
}
