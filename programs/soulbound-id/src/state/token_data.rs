use anchor_lang::prelude::*;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_DOB_LEN: usize = 16;
pub const MAX_GENDER_LEN: usize = 16;

#[account]
#[derive(InitSpace, Debug)]
pub struct TokenData {
    /// Bump seed for the PDA
    pub bump: u8,
    /// Mint this identity record is attached to
    pub mint: Pubkey,
    /// Wallet that minted the identity and may burn/close it
    pub owner: Pubkey,
    /// Whether the identity currently backs a unit of supply
    pub is_active: bool,
    /// Subject name
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Subject date of birth
    #[max_len(MAX_DOB_LEN)]
    pub dob: String,
    /// Subject gender
    #[max_len(MAX_GENDER_LEN)]
    pub gender: String,
}

impl TokenData {
    pub fn pda(mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"token_data", mint.as_ref()], &crate::ID)
    }

    /// Address of the identity mint for a given owner. The mint is its own
    /// authority, so CPIs sign with these seeds plus the bump.
    pub fn mint_pda(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"mint", owner.as_ref()], &crate::ID)
    }
}
