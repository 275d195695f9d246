use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_from_pda;
use crate::event::*;

/**
 * Account context for sweeping tokens out of the vault
 *
 * The owner may withdraw any amount the vault holds, at any time. Claim
 * markers are untouched, so addresses and profiles that already claimed
 * stay blocked.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    /// The airdrop account whose vault is swept
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault holding the remaining tokens
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// Must match the owner stored in the airdrop state
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws `amount` tokens from the vault to the owner
 *
 * Validation Rules:
 * - Only the owner can call this function
 * - The vault must hold at least `amount`
 */
pub fn handle_withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let remaining_balance = airdrop.check_withdrawal(
        &ctx.accounts.owner.key(),
        ctx.accounts.token_vault.amount,
        amount,
    )?;

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

    if amount > 0 {
        transfer_from_pda(
            ctx.accounts.airdrop.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            ctx.accounts.token_mint.decimals,
            signer,
        )?;
    }

    emit_cpi!(TokensWithdrawn {
        airdrop: airdrop.key(),
        owner: ctx.accounts.owner.key(),
        amount_withdrawn: amount,
        remaining_balance,
    });

    Ok(())
}
