use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Registry already initialized")]
    AlreadyInitialized,
    #[msg("An active identity already exists for this mint")]
    IdentityAlreadyActive,
    #[msg("Identity fields are empty or exceed their length bounds")]
    InvalidIdentityFields,
    #[msg("Identity is not active")]
    NotActive,
    #[msg("Identity is still active")]
    StillActive,
    #[msg("Destination balance does not match expected supply")]
    BalanceMismatch,
    #[msg("A poll with this id already exists")]
    PollAlreadyExists,
    #[msg("Poll not found")]
    PollNotFound,
    #[msg("A candidate with this name already exists for the poll")]
    CandidateAlreadyExists,
    #[msg("Candidate not found")]
    CandidateNotFound,
    #[msg("Poll is not open for voting")]
    PollNotOpen,
    #[msg("Signer does not match the recorded owner")]
    Unauthorized,
}
