use anchor_lang::prelude::*;

use crate::{error::ErrorCode, TokenData, TokenRegistry};

#[derive(Accounts)]
pub struct CloseIdentity<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        mut,
        close = payer,
        seeds = [b"token_data", token_data.mint.as_ref()],
        bump = token_data.bump,
        constraint = token_data.owner == payer.key() @ ErrorCode::Unauthorized,
    )]
    pub token_data: Box<Account<'info, TokenData>>,
    #[account(
        mut,
        seeds = [b"registry"],
        bump = token_registry.bump
    )]
    pub token_registry: Box<Account<'info, TokenRegistry>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CloseIdentity>) -> Result<()> {
    let token_data = &ctx.accounts.token_data;
    require!(!token_data.is_active, ErrorCode::StillActive);

    // Every closable record was counted at mint time, so the count is >= 1.
    let token_registry = &mut ctx.accounts.token_registry;
    token_registry.active_identities = token_registry.active_identities.checked_sub(1).unwrap();

    msg!("Identity closed for {}", token_data.mint);

    Ok(())
}
