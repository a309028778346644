pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod net;
pub mod services;
pub mod state;

// Convenient re-exports (so call sites can do `bank::Registry`, etc.)
pub use error::{AppResult, DomainError};
pub use models::account::{Account, AccountInput};
pub use models::types::AccountId;
pub use state::registry::Registry;
