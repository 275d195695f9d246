use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/// Moves administration of the airdrop to a new key. Owner only.
/// The airdrop address is unaffected since it is derived from the creator.
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    pub owner: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    let previous_owner = airdrop.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit_cpi!(OwnershipTransferred {
        airdrop: airdrop.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}
