use anchor_lang::prelude::*;

use crate::{error::ErrorCode, Poll};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init_if_needed,
        seeds = [b"poll", poll_id.to_le_bytes().as_ref()],
        bump,
        payer = payer,
        space = 8 + Poll::INIT_SPACE
    )]
    pub poll: Box<Account<'info, Poll>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializePoll>,
    poll_id: u64,
    start_ts: i64,
    end_ts: i64,
    name: String,
    description: String,
) -> Result<()> {
    let poll = &mut ctx.accounts.poll;

    // A freshly created account is zero-filled; a canonical bump never is.
    require!(poll.bump == 0, ErrorCode::PollAlreadyExists);

    poll.bump = ctx.bumps.poll;
    poll.poll_id = poll_id;
    poll.authority = ctx.accounts.payer.key();
    poll.start_ts = start_ts;
    poll.end_ts = end_ts;
    poll.candidate_count = 0;
    poll.name = name;
    poll.description = description;

    Ok(())
}
