use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created and funded
#[event]
pub struct AirdropCreated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Creator and initial owner of the airdrop
    pub owner: Pubkey,
    /// Ethereum-style address whose signatures authorize claims
    pub signer_address: [u8; 20],
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Initial amount of tokens deposited
    pub initial_total_amount: u64,
}

/// Event emitted exactly once per successful claim
#[event]
pub struct AirdropClaimed {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Address that claimed and received the tokens
    pub claimer: Pubkey,
    /// Amount of tokens paid out
    pub amount: u64,
    /// External profile consumed by this claim
    pub profile: String,
    /// Profile metric the amount was derived from
    pub sub_count: u64,
}

/// Event emitted when the trusted signer is rotated
#[event]
pub struct SignerAddressUpdated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Signer address before the rotation
    pub previous_signer: [u8; 20],
    /// Signer address after the rotation
    pub new_signer: [u8; 20],
}

/// Event emitted when the owner sweeps tokens out of the vault
#[event]
pub struct TokensWithdrawn {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount_withdrawn: u64,
    /// Vault balance left after the withdrawal
    pub remaining_balance: u64,
}

/// Event emitted when ownership of the airdrop moves to a new key
#[event]
pub struct OwnershipTransferred {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner before the transfer
    pub previous_owner: Pubkey,
    /// Owner after the transfer
    pub new_owner: Pubkey,
}
