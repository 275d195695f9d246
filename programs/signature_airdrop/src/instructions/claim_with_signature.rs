use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{claim_message_hash, profile_hash, recover_signer_address, to_eth_signed_message_hash, transfer_from_pda};
use crate::event::*;

/**
 * Account context for claiming tokens with a signed attestation
 *
 * The claimer presents (amount, profile, sub_count, signature) issued by the
 * off-chain signer. The program re-derives the signed digest for the
 * transaction signer, checks it against the trusted signer address, marks
 * both the address and the profile as spent, and pays out from the vault.
 *
 * Access Control: Any signer holding a valid attestation for their own address
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(amount: u64, profile: String)]
pub struct ClaimWithSignature<'info> {
    /// The airdrop account holding the trusted signer address
    /// - Will be modified to update total_claimed and claim_count
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Per-address claim marker
    /// - Derived from: ["claim", airdrop_key, claimer_key]
    /// - Created on first attempt; a failed attempt rolls the creation back
    #[account(
        init_if_needed,
        payer = claimer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimer.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Per-profile claim marker
    /// - Derived from: ["profile", airdrop_key, keccak256(profile)]
    #[account(
        init_if_needed,
        payer = claimer,
        space = ProfileClaim::LEN,
        seeds = [PROFILE_SEED.as_bytes(), airdrop.key().as_ref(), profile_hash(&profile).as_ref()],
        bump
    )]
    pub profile_claim: Account<'info, ProfileClaim>,

    /// Token vault paying the claim
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimer's token account to receive the tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = claimer,
        token::token_program = token_program,
    )]
    pub claimer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimer; the attestation must have been issued for this key
    #[account(mut)]
    pub claimer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Claim arguments as submitted by the claimer.
#[derive(Debug, Clone, Copy)]
pub struct ClaimArgs<'a> {
    pub amount: u64,
    pub profile: &'a str,
    pub sub_count: u64,
    pub signature: &'a [u8],
}

/**
 * Validates a claim and applies its state changes
 *
 * Checks run in a fixed order so the most specific reason is reported:
 * 1. amount must equal sub_count
 * 2. claimer must not have claimed
 * 3. profile must not have been claimed
 * 4. signature must recover to the trusted signer for (claimer, amount, profile, sub_count)
 * 5. vault must cover the amount
 *
 * Nothing is written unless every check passes. The caller performs the
 * token transfer; if it fails the runtime discards these writes too.
 */
pub fn process_claim(
    airdrop: &mut Airdrop,
    claim_status: &mut ClaimStatus,
    profile_claim: &mut ProfileClaim,
    claimer: &Pubkey,
    vault_balance: u64,
    args: &ClaimArgs,
) -> Result<()> {
    // ===== VALIDATION PHASE =====

    require!(args.amount == args.sub_count, AirdropError::AmountMismatch);
    require!(!claim_status.claimed, AirdropError::AlreadyClaimed);
    require!(!profile_claim.claimed, AirdropError::ProfileAlreadyClaimed);

    let digest = claim_message_hash(claimer, args.amount, args.profile, args.sub_count);
    let signed_hash = to_eth_signed_message_hash(&digest);
    let recovered = recover_signer_address(&signed_hash, args.signature)?;
    require!(recovered == airdrop.signer_address, AirdropError::InvalidSignature);

    require!(vault_balance >= args.amount, AirdropError::InsufficientLedgerBalance);

    // ===== EFFECTS PHASE =====

    airdrop.record_claim(args.amount)?;

    claim_status.claimed = true;
    claim_status.amount = args.amount;
    claim_status.profile_hash = profile_hash(args.profile);

    profile_claim.claimed = true;
    profile_claim.claimer = *claimer;

    Ok(())
}

/**
 * Claims tokens against a signed attestation
 *
 * @param ctx - The account context
 * @param amount - Amount attested for the claimer
 * @param profile - External profile the attestation was issued for
 * @param sub_count - Profile metric; must equal amount
 * @param signature - 65-byte r || s || v secp256k1 signature
 */
pub fn handle_claim_with_signature(
    ctx: Context<ClaimWithSignature>,
    amount: u64,
    profile: String,
    sub_count: u64,
    signature: Vec<u8>,
) -> Result<()> {
    let claimer = ctx.accounts.claimer.key();
    let vault_balance = ctx.accounts.token_vault.amount;

    process_claim(
        &mut ctx.accounts.airdrop,
        &mut ctx.accounts.claim_status,
        &mut ctx.accounts.profile_claim,
        &claimer,
        vault_balance,
        &ClaimArgs {
            amount,
            profile: &profile,
            sub_count,
            signature: &signature,
        },
    )?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let airdrop = &ctx.accounts.airdrop;
    let airdrop_key = airdrop.key();
    let token_mint_key = airdrop.token_mint;
    let creator_key = airdrop.creator;
    let airdrop_bump = airdrop.bump;

    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_from_pda(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimer_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    emit_cpi!(AirdropClaimed {
        airdrop: airdrop_key,
        claimer,
        amount,
        profile,
        sub_count,
    });

    Ok(())
}
