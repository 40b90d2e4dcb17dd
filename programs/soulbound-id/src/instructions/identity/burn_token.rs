use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::{error::ErrorCode, TokenData};

#[derive(Accounts)]
pub struct BurnToken<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        mut,
        seeds = [b"mint", payer.key().as_ref()],
        bump,
    )]
    pub mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        seeds = [b"token_data", mint.key().as_ref()],
        bump = token_data.bump,
        constraint = token_data.owner == payer.key() @ ErrorCode::Unauthorized,
    )]
    pub token_data: Box<Account<'info, TokenData>>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = payer,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<BurnToken>) -> Result<()> {
    require!(ctx.accounts.token_data.is_active, ErrorCode::NotActive);

    // The destination must hold exactly the minted unit. Anything else means
    // supply and the identity record have diverged.
    require!(
        ctx.accounts.destination.amount == 1,
        ErrorCode::BalanceMismatch
    );

    burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.payer.to_account_info(),
            },
        ),
        1,
    )?;

    let token_data = &mut ctx.accounts.token_data;
    token_data.is_active = false;

    msg!("Identity burned for {}", token_data.mint);

    Ok(())
}
