//! # Fungible Exchange Scenarios
//!
//! Full lock → claim / unlock lifecycles for token pools, driven through
//! the invocable contract surface.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{ledger, ALICE, BOB};
    use asset_exchange::payloads::{
        encode_fungible_agreement, encode_htlc_claim, encode_htlc_lock,
    };
    use asset_exchange::{
        create_hash_lock, generate_random_preimage, AssetExchangeError, Identity, TokenLedger,
        DEFAULT_PREIMAGE_LEN,
    };

    const PREIMAGE: &[u8] = b"swap-secret-002";

    fn agreement(num_units: u64) -> String {
        encode_fungible_agreement("TOK", num_units, BOB, ALICE)
    }

    fn lock_payload(expiry: u64) -> String {
        encode_htlc_lock(&create_hash_lock(PREIMAGE), expiry)
    }

    #[test]
    fn test_fungible_lock_claim_lifecycle() {
        let l = ledger();
        l.tokens.mint("TOK", &Identity::from(ALICE), 250);

        // Locking 100 units debits Alice immediately.
        let contract_id = l
            .service
            .lock_fungible_asset(&agreement(100), &lock_payload(2000))
            .unwrap();
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(ALICE)).unwrap(),
            150
        );
        assert!(l.service.is_fungible_asset_locked(&contract_id).unwrap());

        // Bob claims; his balance grows by the pool, Alice's is unchanged.
        l.caller.set_caller(BOB);
        assert!(l
            .service
            .claim_fungible_asset(&contract_id, &encode_htlc_claim(PREIMAGE))
            .unwrap());
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(BOB)).unwrap(),
            100
        );
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(ALICE)).unwrap(),
            150
        );

        // The lookup entry for the contract id is gone.
        assert!(!l.service.is_fungible_asset_locked(&contract_id).unwrap());
        let err = l
            .service
            .claim_fungible_asset(&contract_id, &encode_htlc_claim(PREIMAGE))
            .unwrap_err();
        assert!(matches!(err, AssetExchangeError::NotFound { .. }));
    }

    #[test]
    fn test_fungible_expiry_then_unlock_restores_balance() {
        let l = ledger();
        l.tokens.mint("TOK", &Identity::from(ALICE), 100);

        let contract_id = l
            .service
            .lock_fungible_asset(&agreement(100), &lock_payload(2000))
            .unwrap();
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(ALICE)).unwrap(),
            0
        );

        // No claim before expiry; Alice reclaims and is made whole.
        l.clock.set_time(2500);
        assert!(l.service.unlock_fungible_asset(&contract_id).unwrap());
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(ALICE)).unwrap(),
            100
        );

        // A late claim attempt misses the lookup index.
        l.caller.set_caller(BOB);
        let err = l
            .service
            .claim_fungible_asset(&contract_id, &encode_htlc_claim(PREIMAGE))
            .unwrap_err();
        assert!(matches!(err, AssetExchangeError::NotFound { .. }));
    }

    #[test]
    fn test_fungible_overcommit_is_rejected_up_front() {
        let l = ledger();
        l.tokens.mint("TOK", &Identity::from(ALICE), 50);

        let err = l
            .service
            .lock_fungible_asset(&agreement(100), &lock_payload(2000))
            .unwrap_err();
        assert!(matches!(err, AssetExchangeError::PreconditionFailed { .. }));
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(ALICE)).unwrap(),
            50
        );
    }

    #[test]
    fn test_fungible_claim_before_unlock_wins_the_race() {
        let l = ledger();
        l.tokens.mint("TOK", &Identity::from(ALICE), 100);
        let contract_id = l
            .service
            .lock_fungible_asset(&agreement(100), &lock_payload(2000))
            .unwrap();

        // Bob claims in time; the pool can no longer be reclaimed.
        l.caller.set_caller(BOB);
        assert!(l
            .service
            .claim_fungible_asset(&contract_id, &encode_htlc_claim(PREIMAGE))
            .unwrap());

        l.caller.set_caller(ALICE);
        l.clock.set_time(2500);
        let err = l.service.unlock_fungible_asset(&contract_id).unwrap_err();
        assert!(matches!(err, AssetExchangeError::NotFound { .. }));
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(ALICE)).unwrap(),
            0
        );
    }

    #[test]
    fn test_generated_preimage_drives_a_full_swap() {
        // The locker generates the secret, publishes only its digest, and
        // reveals the preimage to the counterparty off-ledger.
        let preimage = generate_random_preimage(DEFAULT_PREIMAGE_LEN);
        let l = ledger();
        l.tokens.mint("TOK", &Identity::from(ALICE), 10);

        let contract_id = l
            .service
            .lock_fungible_asset(
                &agreement(10),
                &encode_htlc_lock(&create_hash_lock(&preimage), 2000),
            )
            .unwrap();

        l.caller.set_caller(BOB);
        assert!(l
            .service
            .claim_fungible_asset(&contract_id, &encode_htlc_claim(&preimage))
            .unwrap());
        assert_eq!(
            l.tokens.balance_of("TOK", &Identity::from(BOB)).unwrap(),
            10
        );
    }
}
