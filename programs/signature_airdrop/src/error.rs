use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Claim validation errors, reported in this order
    #[msg("Amount must match sub count")]
    AmountMismatch,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Profile already claimed")]
    ProfileAlreadyClaimed,
    #[msg("Invalid signature")]
    InvalidSignature,

    // Custody errors
    #[msg("Insufficient airdrop balance")]
    InsufficientLedgerBalance,

    // Access control errors
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid signer address")]
    InvalidSignerAddress,
    #[msg("Invalid owner account")]
    InvalidOwner,

    // Input validation errors
    #[msg("Invalid amount")]
    InvalidAmount,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,
}
