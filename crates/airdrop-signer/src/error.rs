use thiserror::Error;

/// Failures reported to the request layer. None of them are retried here;
/// the caller fixes its input or the upstream and asks again.
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("invalid signer key: {0}")]
    InvalidKey(String),
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),
    #[error("upstream profile unavailable: {0}")]
    UpstreamProfileUnavailable(String),
    #[error("invalid profile data: {0}")]
    InvalidProfile(String),
    #[error("claim amount overflows u64 (metric {metric} x {per_unit})")]
    AmountOverflow { metric: u64, per_unit: u64 },
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("signing failed: {0}")]
    Signing(String),
}

impl SignerError {
    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            SignerError::InvalidKey(_) => "InvalidKey",
            SignerError::InvalidAddressFormat(_) => "InvalidAddressFormat",
            SignerError::UpstreamProfileUnavailable(_) => "UpstreamProfileUnavailable",
            SignerError::InvalidProfile(_) => "InvalidProfile",
            SignerError::AmountOverflow { .. } => "AmountOverflow",
            SignerError::InvalidSignature(_) => "InvalidSignature",
            SignerError::Signing(_) => "Signing",
        }
    }
}
