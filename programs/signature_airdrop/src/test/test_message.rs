#[cfg(test)]
mod tests {
    use anchor_lang::solana_program::keccak;
    use crate::constants::ETH_SIGNED_MESSAGE_PREFIX;
    use crate::test::fixtures::pubkey;
    use crate::utils::*;

    #[test]
    fn test_keccak_is_legacy_keccak256() {
        // keccak256("") as used by Ethereum, not NIST SHA3-256
        let expected: [u8; 32] = [
            0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c,
            0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
            0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b,
            0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
        ];
        assert_eq!(keccak::hash(b"").to_bytes(), expected);
    }

    #[test]
    fn test_claim_message_layout() {
        let claimer = pubkey(7);
        let message = encode_claim_message(&claimer, 100, "alice", 0x0102);

        assert_eq!(message.len(), 32 + 32 + 5 + 32);
        assert_eq!(&message[..32], claimer.as_ref());

        // amount: 32-byte big-endian word
        assert!(message[32..63].iter().all(|b| *b == 0));
        assert_eq!(message[63], 100);

        // profile: raw bytes, no length prefix
        assert_eq!(&message[64..69], b"alice");

        // sub_count: 32-byte big-endian word
        assert!(message[69..99].iter().all(|b| *b == 0));
        assert_eq!(&message[99..], &[0x01, 0x02]);
    }

    #[test]
    fn test_full_width_amount_encoding() {
        let message = encode_claim_message(&pubkey(1), u64::MAX, "", u64::MAX);

        assert_eq!(message.len(), 96);
        assert!(message[32..56].iter().all(|b| *b == 0));
        assert!(message[56..64].iter().all(|b| *b == 0xff));
        assert!(message[88..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn test_hash_matches_packed_bytes() {
        let claimer = pubkey(3);
        for (amount, profile) in [(0u64, ""), (100, "alice"), (42, "日本語"), (u64::MAX, "x")] {
            let packed = encode_claim_message(&claimer, amount, profile, amount);
            assert_eq!(
                claim_message_hash(&claimer, amount, profile, amount),
                keccak::hash(&packed).to_bytes()
            );
        }
    }

    #[test]
    fn test_every_field_changes_the_digest() {
        let base = claim_message_hash(&pubkey(1), 100, "alice", 100);

        assert_ne!(base, claim_message_hash(&pubkey(2), 100, "alice", 100));
        assert_ne!(base, claim_message_hash(&pubkey(1), 101, "alice", 100));
        assert_ne!(base, claim_message_hash(&pubkey(1), 100, "alicf", 100));
        assert_ne!(base, claim_message_hash(&pubkey(1), 100, "alice", 101));
    }

    #[test]
    fn test_eth_signed_message_envelope() {
        let digest = claim_message_hash(&pubkey(1), 100, "alice", 100);

        let mut envelope = ETH_SIGNED_MESSAGE_PREFIX.to_vec();
        envelope.extend_from_slice(&digest);

        assert_eq!(ETH_SIGNED_MESSAGE_PREFIX.len(), 28);
        assert_eq!(to_eth_signed_message_hash(&digest), keccak::hash(&envelope).to_bytes());
        assert_ne!(to_eth_signed_message_hash(&digest), digest);
    }

    #[test]
    fn test_profile_hash() {
        assert_eq!(profile_hash("alice"), keccak::hash(b"alice").to_bytes());
        assert_ne!(profile_hash("alice"), profile_hash("Alice"));
    }
}
