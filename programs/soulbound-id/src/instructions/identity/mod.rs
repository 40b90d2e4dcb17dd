pub mod burn_token;
pub mod close_identity;
pub mod initialize_registry;
pub mod initiate_token;

pub use burn_token::*;
pub use close_identity::*;
pub use initialize_registry::*;
pub use initiate_token::*;
