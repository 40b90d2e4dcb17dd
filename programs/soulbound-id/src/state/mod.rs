pub mod candidate;
pub mod poll;
pub mod token_data;
pub mod token_registry;

pub use candidate::*;
pub use poll::*;
pub use token_data::*;
pub use token_registry::*;
