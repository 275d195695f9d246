use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_from_signer;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop
 *
 * This instruction initializes a signature-gated airdrop:
 * - Creates the airdrop PDA holding the trusted signer address
 * - Creates a token vault PDA to hold the tokens to be claimed
 * - Transfers the initial token amount from the creator to the vault
 *
 * Access Control: Anyone; the creator becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateAirdrop<'info> {
    /// The airdrop account (PDA)
    /// - Stores the signer address, owner and running totals
    /// - Derived from: ["airdrop", token_mint, creator]
    #[account(
        init,
        payer = creator,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            creator.key().as_ref(),
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) that holds the tokens to be claimed
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being airdropped
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account funding the vault
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The creator and initial owner of the airdrop
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new airdrop and funds its vault
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_total_amount - Tokens moved from the creator into the vault
 * @param signer_address - Ethereum-style address of the attestation key
 */
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    initial_total_amount: u64,
    signer_address: [u8; 20],
) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.initialize(
        ctx.bumps.airdrop,
        ctx.accounts.creator.key(),
        signer_address,
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.key(),
        initial_total_amount,
    )?;

    transfer_from_signer(
        ctx.accounts.creator.to_account_info(),
        ctx.accounts.creator_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_total_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit_cpi!(AirdropCreated {
        airdrop: airdrop.key(),
        owner: ctx.accounts.creator.key(),
        signer_address,
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        initial_total_amount,
    });

    Ok(())
}
