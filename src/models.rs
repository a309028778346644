pub mod account;
pub mod types;
