use anchor_lang::prelude::*;

use crate::{error::ErrorCode, Candidate, Poll};

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_name: String)]
pub struct InitializeCandidate<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        mut,
        constraint = poll.poll_id == poll_id @ ErrorCode::PollNotFound,
        constraint = poll.authority == payer.key() @ ErrorCode::Unauthorized,
    )]
    pub poll: Box<Account<'info, Poll>>,
    #[account(
        init_if_needed,
        seeds = [b"candidate", poll_id.to_le_bytes().as_ref(), candidate_name.as_bytes()],
        bump,
        payer = payer,
        space = 8 + Candidate::INIT_SPACE
    )]
    pub candidate: Box<Account<'info, Candidate>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeCandidate>,
    poll_id: u64,
    candidate_name: String,
) -> Result<()> {
    let candidate = &mut ctx.accounts.candidate;

    // A freshly created account is zero-filled; a canonical bump never is.
    require!(candidate.bump == 0, ErrorCode::CandidateAlreadyExists);

    candidate.bump = ctx.bumps.candidate;
    candidate.poll_id = poll_id;
    candidate.name = candidate_name;
    candidate.votes = 0;

    let poll = &mut ctx.accounts.poll;
    poll.candidate_count = poll.candidate_count.checked_add(1).unwrap();

    Ok(())
}
