use anchor_lang::prelude::*;

use crate::{error::ErrorCode, TokenRegistry};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init_if_needed,
        seeds = [b"registry"],
        bump,
        payer = payer,
        space = 8 + TokenRegistry::INIT_SPACE
    )]
    pub token_registry: Box<Account<'info, TokenRegistry>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let token_registry = &mut ctx.accounts.token_registry;

    // A freshly created account is zero-filled; a canonical bump never is.
    require!(token_registry.bump == 0, ErrorCode::AlreadyInitialized);

    token_registry.bump = ctx.bumps.token_registry;
    token_registry.active_identities = 0;

    Ok(())
}
