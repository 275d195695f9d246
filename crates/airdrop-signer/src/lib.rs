//! Off-chain half of the signature airdrop: resolves an external identity
//! to a profile, derives the claim amount and signs the claim tuple with
//! the key whose address the program trusts.

pub mod config;
pub mod error;
pub mod resolver;
pub mod service;
pub mod signer;

pub use error::SignerError;
pub use resolver::{ProfileRecord, ProfileResolver, StaticProfileResolver};
pub use service::{AmountPolicy, SigningRequest, SigningResponse, SigningService};
pub use signer::{Attestation, AttestationSigner, ClaimRequest};
