pub mod identity;
pub mod voting;

pub use identity::*;
pub use voting::*;
