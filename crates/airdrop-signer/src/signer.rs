use std::fmt;

use anchor_lang::prelude::Pubkey;
use k256::ecdsa::SigningKey;
use signature_airdrop::constants::SIGNATURE_LEN;
use signature_airdrop::utils::{
    claim_message_hash, eth_address_from_pubkey, recover_signer_address, to_eth_signed_message_hash,
};

use crate::error::SignerError;

/// The tuple an attestation authorizes. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRequest {
    pub claimer: Pubkey,
    pub amount: u64,
    pub profile: String,
    pub sub_count: u64,
}

impl ClaimRequest {
    /// Hash the key signs: the packed claim digest inside the personal-message envelope.
    pub fn signing_hash(&self) -> [u8; 32] {
        let digest = claim_message_hash(&self.claimer, self.amount, &self.profile, self.sub_count);
        to_eth_signed_message_hash(&digest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attestation {
    pub request: ClaimRequest,
    /// r || s || v, v in {27, 28}
    pub signature: [u8; 65],
}

impl Attestation {
    /// 0x-prefixed, 130 hex characters.
    pub fn signature_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signature))
    }

    /// Address that produced the signature, or None if it does not recover.
    pub fn recover_signer(&self) -> Option<[u8; 20]> {
        recover_signer_address(&self.request.signing_hash(), &self.signature).ok()
    }
}

/// Holds the attestation key. Signing is a pure function of the request and
/// the key, so one instance can serve any number of threads.
pub struct AttestationSigner {
    key: SigningKey,
    address: [u8; 20],
}

impl fmt::Debug for AttestationSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttestationSigner")
            .field("address", &format_address(&self.address))
            .finish_non_exhaustive()
    }
}

impl AttestationSigner {
    /// Parses a 32-byte hex private key, with or without 0x.
    pub fn from_hex(private_key: &str) -> Result<Self, SignerError> {
        let trimmed = private_key.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(digits)
            .map_err(|_| SignerError::InvalidKey("private key is not valid hex".to_string()))?;
        if bytes.len() != 32 {
            return Err(SignerError::InvalidKey(format!(
                "private key must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        let key = SigningKey::from_slice(&bytes)
            .map_err(|_| SignerError::InvalidKey("private key is not a valid secp256k1 scalar".to_string()))?;
        Ok(Self::from_signing_key(key))
    }

    pub fn from_signing_key(key: SigningKey) -> Self {
        let point = key.verifying_key().to_encoded_point(false);
        let mut pubkey = [0u8; 64];
        pubkey.copy_from_slice(&point.as_bytes()[1..]);
        let address = eth_address_from_pubkey(&pubkey);
        Self { key, address }
    }

    /// Address to register on chain as the airdrop's signer.
    pub fn signer_address(&self) -> [u8; 20] {
        self.address
    }

    pub fn signer_address_hex(&self) -> String {
        format_address(&self.address)
    }

    /// Signs `request` with RFC 6979 nonces, so equal inputs give equal bytes.
    ///
    /// The caller is expected to have set `amount == sub_count`; the program
    /// re-checks it. A 32-byte prehash never fails to sign with a valid key,
    /// the error arm only forwards what the curve library reports.
    pub fn sign(&self, request: ClaimRequest) -> Result<Attestation, SignerError> {
        let hash = request.signing_hash();
        // k256 already returns the low-s form the program requires
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&hash)
            .map_err(|e| SignerError::Signing(e.to_string()))?;

        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = 27 + recovery_id.to_byte();

        Ok(Attestation {
            request,
            signature: bytes,
        })
    }

    /// Whether `attestation` was signed by this key over its own request.
    pub fn verify(&self, attestation: &Attestation) -> bool {
        attestation.recover_signer() == Some(self.address)
    }
}

pub fn format_address(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Parses a 0x-prefixed (or bare) 130-hex-character signature.
pub fn parse_signature(value: &str) -> Result<[u8; 65], SignerError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits)
        .map_err(|_| SignerError::InvalidSignature("signature is not valid hex".to_string()))?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        SignerError::InvalidSignature(format!("expected {SIGNATURE_LEN} bytes, got {}", bytes.len()))
    })
}
