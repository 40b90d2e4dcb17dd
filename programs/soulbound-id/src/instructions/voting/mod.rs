pub mod initialize_candidate;
pub mod initialize_poll;
pub mod vote;

pub use initialize_candidate::*;
pub use initialize_poll::*;
pub use vote::*;
