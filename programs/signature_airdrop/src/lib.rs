use anchor_lang::prelude::*;

declare_id!("EnT8kc8sgdeFpyFpQopbjp6nysXn63tK5L3bQbvixb3Z");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Signature Airdrop Program
 *
 * Pays a one-time token amount to wallets that present an attestation from
 * a trusted off-chain signer. The signer derives the amount from an external
 * profile's metric (for example a follower count) and signs
 * (claimer, amount, profile, sub_count) with a secp256k1 key using the
 * Ethereum personal-message envelope.
 *
 * Key Features:
 * - secp256k1 signature recovery against a single trusted signer address
 * - One claim per address and one claim per profile, enforced on chain
 * - Owner-controlled signer rotation and token withdrawal
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: Stores owner, signer address and running totals
 * - Token Vault PDA: Holds tokens to be claimed
 * - Claim Status PDAs: Mark addresses that have claimed
 * - Profile Claim PDAs: Mark profiles that have been claimed
 *
 * Workflow:
 * 1. Creator creates the airdrop, registers the signer address and deposits tokens
 * 2. Off-chain signer issues attestations for (claimer, profile) pairs
 * 3. Claimers submit their attestation and receive the attested amount
 * 4. Owner rotates the signer or withdraws tokens as needed
 */
#[program]
pub mod signature_airdrop {
    use super::*;

    /**
     * Creates a new airdrop
     *
     * @param ctx - Account context containing airdrop, vault and creator accounts
     * @param initial_total_amount - Tokens deposited into the vault
     * @param signer_address - Ethereum-style address of the attestation key
     *
     * Access Control: Anyone; the creator becomes the owner
     */
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        initial_total_amount: u64,
        signer_address: [u8; 20],
    ) -> Result<()> {
        handle_create_airdrop(ctx, initial_total_amount, signer_address)
    }

    /**
     * Claims tokens with a signed attestation
     *
     * @param ctx - Account context containing airdrop, claim markers and token accounts
     * @param amount - Attested amount
     * @param profile - External profile the attestation was issued for
     * @param sub_count - Profile metric, must equal amount
     * @param signature - 65-byte r || s || v signature from the trusted signer
     *
     * Access Control: Any user holding an attestation issued for their own key
     */
    pub fn claim_with_signature(
        ctx: Context<ClaimWithSignature>,
        amount: u64,
        profile: String,
        sub_count: u64,
        signature: Vec<u8>,
    ) -> Result<()> {
        handle_claim_with_signature(ctx, amount, profile, sub_count, signature)
    }

    /**
     * Rotates the trusted attestation signer
     *
     * Access Control: Owner only
     * Note: Attestations from the previous key stop verifying immediately
     */
    pub fn set_signer_address(ctx: Context<SetSignerAddress>, new_signer: [u8; 20]) -> Result<()> {
        handle_set_signer_address(ctx, new_signer)
    }

    /**
     * Withdraws tokens from the vault to the owner
     *
     * Access Control: Owner only
     */
    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        handle_withdraw_tokens(ctx, amount)
    }

    /// Transfers ownership of the airdrop. Owner only.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }
}
