use anchor_lang::prelude::*;

use crate::{error::ErrorCode, Candidate, Poll};

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_name: String)]
pub struct Vote<'info> {
    pub voter: Signer<'info>,
    #[account(constraint = poll.poll_id == poll_id @ ErrorCode::PollNotFound)]
    pub poll: Box<Account<'info, Poll>>,
    #[account(
        mut,
        constraint = candidate.poll_id == poll_id @ ErrorCode::CandidateNotFound,
        constraint = candidate.name == candidate_name @ ErrorCode::CandidateNotFound,
    )]
    pub candidate: Box<Account<'info, Candidate>>,
}

pub fn handler(ctx: Context<Vote>, _poll_id: u64, _candidate_name: String) -> Result<()> {
    let clock = Clock::get()?;
    require!(
        ctx.accounts.poll.is_open(clock.unix_timestamp),
        ErrorCode::PollNotOpen
    );

    let candidate = &mut ctx.accounts.candidate;
    candidate.votes = candidate.votes.checked_add(1).unwrap();

    Ok(())
}
