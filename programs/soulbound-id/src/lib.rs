#![allow(ambiguous_glob_reexports)]
#![allow(unexpected_cfgs)] // See: https://solana.stackexchange.com/a/19845

pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("3vcWAkWpAb8QHxLt1wbAnzMMbzqFhpYve2madWDatYU5");

#[program]
pub mod soulbound_id {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        initialize_registry::handler(ctx)
    }

    pub fn initiate_token(ctx: Context<InitiateToken>, params: IdentityParams) -> Result<()> {
        initiate_token::handler(ctx, params)
    }

    pub fn burn_token(ctx: Context<BurnToken>) -> Result<()> {
        burn_token::handler(ctx)
    }

    pub fn close_identity(ctx: Context<CloseIdentity>) -> Result<()> {
        close_identity::handler(ctx)
    }

    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        start_ts: i64,
        end_ts: i64,
        name: String,
        description: String,
    ) -> Result<()> {
        initialize_poll::handler(ctx, poll_id, start_ts, end_ts, name, description)
    }

    pub fn initialize_candidate(
        ctx: Context<InitializeCandidate>,
        poll_id: u64,
        candidate_name: String,
    ) -> Result<()> {
        initialize_candidate::handler(ctx, poll_id, candidate_name)
    }

    pub fn vote(ctx: Context<Vote>, poll_id: u64, candidate_name: String) -> Result<()> {
        vote::handler(ctx, poll_id, candidate_name)
    }
}
