use anchor_client::{solana_sdk::signature::Signature, ClientError};

pub fn assert_client_err(res: Result<Signature, ClientError>, needle: &str) {
    let err = res
        .expect_err("transaction unexpectedly succeeded")
        .to_string();
    assert!(err.contains(needle), "unexpected client error: {err}");
}
