pub mod assert;
pub mod fetch_utils;
pub mod setup;
