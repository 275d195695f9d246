use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds for every PDA the airdrop owns, plus the fixed parameters of the
 * Ethereum-style attestation format that the off-chain signer and this
 * program must agree on byte for byte.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop PDA derivation
/// - Used in: ["airdrop", token_mint, creator]
/// - The creator is fixed at creation; ownership can move without changing the address
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - The vault's token authority is the airdrop PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", airdrop_key, claimer_key]
/// - One account per claimer; its `claimed` flag is the per-address spend marker
pub const CLAIM_SEED: &str = "claim";

/// Seed for profile claim PDA derivation
/// - Used in: ["profile", airdrop_key, keccak256(profile)]
/// - One account per external profile; its `claimed` flag is the per-profile spend marker
/// - Hashed so that profiles of any length fit in a single 32-byte seed
pub const PROFILE_SEED: &str = "profile";

/// ===== ATTESTATION FORMAT CONSTANTS =====

/// Length of a recoverable secp256k1 signature: r (32) || s (32) || v (1)
pub const SIGNATURE_LEN: usize = 65;

/// Length of an Ethereum-style signer address
pub const ETH_ADDRESS_LEN: usize = 20;

/// Personal-message prefix applied to the 32-byte claim digest before signing
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// secp256k1 group order divided by two. Signatures with `s` above this
/// value are the malleable twin of a low-s signature and are rejected.
pub const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d,
    0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];
