use anchor_lang::prelude::*;
use anchor_lang::solana_program::{keccak, secp256k1_recover::secp256k1_recover};
use crate::constants::*;
use crate::error::*;

/// Ethereum-style address of an uncompressed secp256k1 public key given
/// without its 0x04 tag: the last 20 bytes of keccak256(x || y).
pub fn eth_address_from_pubkey(pubkey: &[u8; 64]) -> [u8; 20] {
    let hash = keccak::hash(pubkey).to_bytes();
    let mut address = [0u8; ETH_ADDRESS_LEN];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Recovers the address that produced `signature` over `hash`.
///
/// `signature` is `r || s || v` with `v` in {0, 1, 27, 28}. High-s
/// signatures are refused so that each attestation has a single valid
/// encoding. Every failure maps to `InvalidSignature`.
pub fn recover_signer_address(hash: &[u8; 32], signature: &[u8]) -> Result<[u8; 20]> {
    require!(signature.len() == SIGNATURE_LEN, AirdropError::InvalidSignature);

    let (rs, v) = signature.split_at(64);
    let recovery_id = match v[0] {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return err!(AirdropError::InvalidSignature),
    };

    // Byte arrays compare lexicographically, which for big-endian words is numeric order
    require!(rs[32..] <= SECP256K1_HALF_ORDER[..], AirdropError::InvalidSignature);

    let pubkey = secp256k1_recover(hash, recovery_id, rs)
        .map_err(|_| error!(AirdropError::InvalidSignature))?;

    Ok(eth_address_from_pubkey(&pubkey.to_bytes()))
}
