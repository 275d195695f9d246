use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Main airdrop state account
 *
 * This struct holds the configuration and running totals of one
 * signature-gated airdrop: who administers it, which Ethereum-style key
 * is trusted to sign claims, and which vault pays them out.
 *
 * Derivation: ["airdrop", token_mint, creator]
 *
 * Lifecycle:
 * 1. Created during create_airdrop (creator becomes owner)
 * 2. Signer address rotated and ownership transferred by the owner
 * 3. Updated during claims (total_claimed and claim_count increment)
 * 4. Lives for as long as the program does; there is no close instruction
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when the vault is signed for
    pub bump: u8,

    /// Account that created the airdrop
    /// - Part of the PDA seeds, so it never changes
    pub creator: Pubkey,

    /// Current owner
    /// - Can rotate the signer, withdraw tokens and transfer ownership
    pub owner: Pubkey,

    /// Ethereum-style address of the trusted attestation signer
    /// - keccak256(uncompressed secp256k1 public key)[12..]
    /// - Replaced immediately by set_signer_address, no grace period
    pub signer_address: [u8; 20],

    /// Token mint address
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA holding the tokens to be claimed
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Amount deposited at creation
    pub initial_total_amount: u64,

    /// Total amount paid out to claimers
    pub total_claimed: u64,

    /// Number of successful claims
    pub claim_count: u64,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    pub fn find_address(token_mint: &Pubkey, creator: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[AIRDROP_SEED.as_bytes(), token_mint.as_ref(), creator.as_ref()],
            &crate::ID,
        )
    }

    pub fn find_vault_address(airdrop: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED.as_bytes(), airdrop.as_ref()], &crate::ID)
    }

    /// Fills a freshly created airdrop. The creator becomes the owner;
    /// totals start at zero.
    pub fn initialize(
        &mut self,
        bump: u8,
        creator: Pubkey,
        signer_address: [u8; 20],
        token_mint: Pubkey,
        token_vault: Pubkey,
        initial_total_amount: u64,
    ) -> Result<()> {
        require!(initial_total_amount > 0, AirdropError::InvalidAmount);
        require!(signer_address != [0u8; 20], AirdropError::InvalidSignerAddress);

        self.bump = bump;
        self.creator = creator;
        self.owner = creator;
        self.signer_address = signer_address;
        self.token_mint = token_mint;
        self.token_vault = token_vault;
        self.initial_total_amount = initial_total_amount;
        self.total_claimed = 0;
        self.claim_count = 0;
        Ok(())
    }

    pub fn signer_address(&self) -> [u8; 20] {
        self.signer_address
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, AirdropError::Unauthorized);
        Ok(())
    }

    /// Replaces the trusted signer, returning the previous address.
    pub fn rotate_signer(&mut self, caller: &Pubkey, new_signer: [u8; 20]) -> Result<[u8; 20]> {
        self.require_owner(caller)?;
        require!(new_signer != [0u8; 20], AirdropError::InvalidSignerAddress);

        let previous = self.signer_address;
        self.signer_address = new_signer;
        Ok(previous)
    }

    /// Hands administration to `new_owner`, returning the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.require_owner(caller)?;
        require!(new_owner != Pubkey::default(), AirdropError::InvalidOwner);

        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    /// Checks an owner withdrawal against the vault balance and returns
    /// what the vault will hold afterwards.
    pub fn check_withdrawal(&self, caller: &Pubkey, vault_balance: u64, amount: u64) -> Result<u64> {
        self.require_owner(caller)?;
        vault_balance
            .checked_sub(amount)
            .ok_or_else(|| error!(AirdropError::InsufficientLedgerBalance))
    }

    /// Adds a payout to the running totals.
    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        self.claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        Ok(())
    }
}
