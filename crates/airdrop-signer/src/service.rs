use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SignerError;
use crate::resolver::{ProfileRecord, ProfileResolver};
use crate::signer::{Attestation, AttestationSigner, ClaimRequest};

/// How a profile metric becomes a token amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountPolicy {
    /// Base units paid per unit of metric (1 means amount == metric).
    pub per_unit: u64,
}

impl Default for AmountPolicy {
    fn default() -> Self {
        Self { per_unit: 1 }
    }
}

impl AmountPolicy {
    pub fn amount_for(&self, metric: u64) -> Result<u64, SignerError> {
        metric
            .checked_mul(self.per_unit)
            .ok_or(SignerError::AmountOverflow {
                metric,
                per_unit: self.per_unit,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningRequest {
    /// Base58 Solana address of the wallet that will submit the claim
    pub claimer_address: String,
    /// Handle to look up with the profile provider
    pub external_identity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningResponse {
    pub profile: String,
    /// Decimal string
    pub amount: String,
    /// Decimal string, always equal to `amount`
    pub sub_count: String,
    /// 0x-prefixed 65-byte signature
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl From<&SignerError> for ErrorResponse {
    fn from(err: &SignerError) -> Self {
        Self {
            error: err.code(),
            message: err.to_string(),
        }
    }
}

pub fn parse_claimer(value: &str) -> Result<Pubkey, SignerError> {
    Pubkey::from_str(value.trim()).map_err(|_| SignerError::InvalidAddressFormat(value.to_string()))
}

/// Turns signing requests into attestations.
///
/// Holds no per-request state: nothing about issued attestations is
/// remembered, replay protection belongs to the program.
#[derive(Debug)]
pub struct SigningService<R> {
    signer: AttestationSigner,
    resolver: R,
    policy: AmountPolicy,
}

impl<R: ProfileResolver> SigningService<R> {
    pub fn new(signer: AttestationSigner, resolver: R, policy: AmountPolicy) -> Self {
        Self {
            signer,
            resolver,
            policy,
        }
    }

    pub fn signer(&self) -> &AttestationSigner {
        &self.signer
    }

    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    /// Signs a claim for an already resolved profile.
    pub fn attest(&self, claimer: Pubkey, record: ProfileRecord) -> Result<Attestation, SignerError> {
        record.validate()?;
        let amount = self.policy.amount_for(record.sub_count)?;

        // The program requires amount == sub_count, so the signed tuple carries the derived amount twice
        self.signer.sign(ClaimRequest {
            claimer,
            amount,
            profile: record.profile,
            sub_count: amount,
        })
    }

    pub fn handle(&self, request: &SigningRequest) -> Result<SigningResponse, SignerError> {
        let claimer = parse_claimer(&request.claimer_address).inspect_err(|_| {
            warn!(address = %request.claimer_address, "rejected signing request with malformed address");
        })?;

        let identity = request.external_identity.trim();
        if identity.is_empty() {
            return Err(SignerError::InvalidProfile("external identity is empty".to_string()));
        }

        debug!(%claimer, identity, "resolving profile");
        let record = self.resolver.resolve(identity).inspect_err(|err| {
            warn!(%claimer, identity, error = %err, "profile lookup failed");
        })?;

        let attestation = self.attest(claimer, record)?;
        let ClaimRequest {
            amount,
            profile,
            sub_count,
            ..
        } = &attestation.request;

        info!(%claimer, profile = %profile, amount, "issued claim attestation");

        Ok(SigningResponse {
            profile: profile.clone(),
            amount: amount.to_string(),
            sub_count: sub_count.to_string(),
            signature: attestation.signature_hex(),
        })
    }
}
