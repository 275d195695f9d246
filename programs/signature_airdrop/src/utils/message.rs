use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use crate::constants::ETH_SIGNED_MESSAGE_PREFIX;

/// Left-pads a u64 into a 32-byte big-endian uint256 word.
fn uint256_be(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Tightly packed claim tuple:
/// `claimer (32) || amount (uint256 BE) || profile (raw UTF-8) || sub_count (uint256 BE)`.
///
/// The profile length is not encoded. The off-chain signer hashes exactly
/// these bytes, so any change here invalidates every issued attestation.
pub fn encode_claim_message(claimer: &Pubkey, amount: u64, profile: &str, sub_count: u64) -> Vec<u8> {
    let mut message = Vec::with_capacity(32 + 32 + profile.len() + 32);
    message.extend_from_slice(claimer.as_ref());
    message.extend_from_slice(&uint256_be(amount));
    message.extend_from_slice(profile.as_bytes());
    message.extend_from_slice(&uint256_be(sub_count));
    message
}

/// keccak256 of the packed claim tuple.
pub fn claim_message_hash(claimer: &Pubkey, amount: u64, profile: &str, sub_count: u64) -> [u8; 32] {
    let amount_word = uint256_be(amount);
    let sub_count_word = uint256_be(sub_count);
    keccak::hashv(&[
        claimer.as_ref(),
        &amount_word,
        profile.as_bytes(),
        &sub_count_word,
    ])
    .to_bytes()
}

/// Wraps a 32-byte digest in the "\x19Ethereum Signed Message:\n32" envelope,
/// the hash actually signed by the attestation key.
pub fn to_eth_signed_message_hash(digest: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[ETH_SIGNED_MESSAGE_PREFIX, digest]).to_bytes()
}

/// keccak256 of the profile bytes, stored with each claim for indexers.
pub fn profile_hash(profile: &str) -> [u8; 32] {
    keccak::hash(profile.as_bytes()).to_bytes()
}
