use std::{thread, time::Duration};

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
    },
    Client, Cluster, Program,
};

pub fn load_payer() -> Keypair {
    let path = std::env::var("ANCHOR_WALLET").unwrap_or_else(|_| {
        format!(
            "{}/.config/solana/id.json",
            std::env::var("HOME").expect("HOME not set")
        )
    });
    read_keypair_file(&path).expect("failed to read wallet keypair")
}

pub fn localnet_client(payer: &Keypair) -> Client<&Keypair> {
    Client::new_with_options(Cluster::Localnet, payer, CommitmentConfig::confirmed())
}

pub fn airdrop(program: &Program<&Keypair>, to: &Pubkey, lamports: u64) {
    let rpc = program.rpc();
    let sig = rpc.request_airdrop(to, lamports).unwrap();
    while !rpc.confirm_transaction(&sig).unwrap() {
        thread::sleep(Duration::from_millis(200));
    }
}
