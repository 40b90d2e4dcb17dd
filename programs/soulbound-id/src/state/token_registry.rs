use anchor_lang::prelude::*;

/// Singleton counter of registered identities. An identity is counted from
/// mint to close; burning deactivates the record but keeps its entry. Mutated
/// only by the instructions that also mutate TokenData, so the count and the
/// records never disagree.
#[account]
#[derive(InitSpace, Debug)]
pub struct TokenRegistry {
    /// Bump seed for the PDA. Zero until first initialization.
    pub bump: u8,
    /// Number of identity records currently registered
    pub active_identities: u64,
}

impl TokenRegistry {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"registry"], &crate::ID)
    }
}
