use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/**
 * Account context for rotating the attestation signer
 *
 * Attestations signed by the previous key stop verifying as soon as this
 * instruction lands; there is no grace period.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetSignerAddress<'info> {
    /// The airdrop account to update
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Must match the owner stored in the airdrop state
    pub owner: Signer<'info>,
}

pub fn handle_set_signer_address(ctx: Context<SetSignerAddress>, new_signer: [u8; 20]) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    let previous_signer = airdrop.rotate_signer(&ctx.accounts.owner.key(), new_signer)?;

    emit_cpi!(SignerAddressUpdated {
        airdrop: airdrop.key(),
        previous_signer,
        new_signer,
    });

    Ok(())
}
