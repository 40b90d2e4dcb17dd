use anchor_client::{
    anchor_lang::AccountDeserialize,
    solana_sdk::{pubkey::Pubkey, signature::Keypair},
    Program,
};
use anchor_spl::token::TokenAccount;
use soulbound_id::{Candidate, Poll, TokenData, TokenRegistry};

pub fn fetch_token_data(program: &Program<&Keypair>, pubkey: &Pubkey) -> TokenData {
    let account_data = program.rpc().get_account(pubkey).unwrap();
    TokenData::try_deserialize(&mut account_data.data.as_ref()).unwrap()
}

pub fn fetch_registry(program: &Program<&Keypair>, pubkey: &Pubkey) -> TokenRegistry {
    let account_data = program.rpc().get_account(pubkey).unwrap();
    TokenRegistry::try_deserialize(&mut account_data.data.as_ref()).unwrap()
}

pub fn fetch_poll(program: &Program<&Keypair>, pubkey: &Pubkey) -> Poll {
    let account_data = program.rpc().get_account(pubkey).unwrap();
    Poll::try_deserialize(&mut account_data.data.as_ref()).unwrap()
}

pub fn fetch_candidate(program: &Program<&Keypair>, pubkey: &Pubkey) -> Candidate {
    let account_data = program.rpc().get_account(pubkey).unwrap();
    Candidate::try_deserialize(&mut account_data.data.as_ref()).unwrap()
}

pub fn fetch_token_balance(program: &Program<&Keypair>, pubkey: &Pubkey) -> u64 {
    let account_data = program.rpc().get_account(pubkey).unwrap();
    TokenAccount::try_deserialize(&mut account_data.data.as_ref())
        .unwrap()
        .amount
}

pub fn account_exists(program: &Program<&Keypair>, pubkey: &Pubkey) -> bool {
    program.rpc().get_account(pubkey).is_ok()
}
