use anchor_lang::prelude::*;

pub const MAX_POLL_NAME_LEN: usize = 64;
pub const MAX_POLL_DESC_LEN: usize = 256;

#[account]
#[derive(InitSpace, Debug)]
pub struct Poll {
    /// Bump seed for the PDA. Zero until the poll is created.
    pub bump: u8,
    /// Unique poll id, also part of the PDA seeds
    pub poll_id: u64,
    /// Wallet that created the poll and may register candidates
    pub authority: Pubkey,
    /// Voting opens at this unix timestamp (inclusive)
    pub start_ts: i64,
    /// Voting closes at this unix timestamp (exclusive)
    pub end_ts: i64,
    /// Number of candidates registered under this poll
    pub candidate_count: u16,
    /// Poll name
    #[max_len(MAX_POLL_NAME_LEN)]
    pub name: String,
    /// Poll description
    #[max_len(MAX_POLL_DESC_LEN)]
    pub description: String,
}

impl Poll {
    pub fn pda(poll_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"poll", &poll_id.to_le_bytes()], &crate::ID)
    }

    pub fn is_open(&self, current_timestamp: i64) -> bool {
        self.start_ts <= current_timestamp && current_timestamp < self.end_ts
    }
}
