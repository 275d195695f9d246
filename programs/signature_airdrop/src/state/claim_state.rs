use anchor_lang::prelude::*;
use crate::constants::*;
use crate::utils::profile_hash;

/**
 * Per-address claim marker
 *
 * One account per (airdrop, claimer) pair. Its `claimed` flag is the
 * address half of the double-spend guard: once set it is never cleared,
 * so the claimer is blocked from every later claim on this airdrop.
 *
 * Derivation: ["claim", airdrop_key, claimer_key]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (init_if_needed, claimer pays rent)
 * 2. Marked claimed by the successful claim, in the same transaction as the payout
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Set once the claimer has been paid
    pub claimed: bool,
    /// Amount paid to this claimer
    pub amount: u64,
    /// keccak256 of the profile the claim consumed
    pub profile_hash: [u8; 32],
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    pub fn find_address(airdrop: &Pubkey, claimer: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[CLAIM_SEED.as_bytes(), airdrop.as_ref(), claimer.as_ref()],
            &crate::ID,
        )
    }

    pub fn has_claimed(&self) -> bool {
        self.claimed
    }
}

/**
 * Per-profile claim marker
 *
 * One account per (airdrop, profile) pair; the profile half of the
 * double-spend guard. The seed is the keccak256 of the profile, so the
 * profile itself may be any length.
 *
 * Derivation: ["profile", airdrop_key, keccak256(profile)]
 */
#[account]
#[derive(Default, Debug)]
pub struct ProfileClaim {
    /// Set once a claim citing this profile has been paid
    pub claimed: bool,
    /// Address that consumed the profile
    pub claimer: Pubkey,
}

impl ProfileClaim {
    pub const LEN: usize = 8 + std::mem::size_of::<ProfileClaim>();

    pub fn find_address(airdrop: &Pubkey, profile: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[PROFILE_SEED.as_bytes(), airdrop.as_ref(), &profile_hash(profile)],
            &crate::ID,
        )
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }
}
