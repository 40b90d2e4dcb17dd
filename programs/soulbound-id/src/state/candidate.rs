use anchor_lang::prelude::*;

pub const MAX_CANDIDATE_NAME_LEN: usize = 64;

#[account]
#[derive(InitSpace, Debug)]
pub struct Candidate {
    /// Bump seed for the PDA. Zero until the candidate is registered.
    pub bump: u8,
    /// Poll this candidate belongs to
    pub poll_id: u64,
    /// Candidate name, unique within the poll
    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub name: String,
    /// Number of votes received. Only ever incremented.
    pub votes: u64,
}

impl Candidate {
    pub fn pda(poll_id: u64, name: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[b"candidate", &poll_id.to_le_bytes(), name.as_bytes()],
            &crate::ID,
        )
    }
}
