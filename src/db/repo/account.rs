use crate::db::DbResult;
use crate::models::account::{Account, AccountInput};
use crate::models::types::AccountId;

/// Storage gateway for account records.
#[async_trait::async_trait]
pub trait AccountRepo: Send + Sync {
    /// Stores a new account and hands out a fresh id. Ids are never reused.
    async fn insert_account(&self, input: AccountInput) -> DbResult<Account>;

    /// Overwrites the record stored under `account.id`. Returns `DbError::NotFound` when
    /// nothing is stored under that id anymore.
    async fn save_account(&self, account: Account) -> DbResult<Account>;

    /// Returns `None` when the id is unknown
    async fn get_by_id(&self, account_id: AccountId) -> DbResult<Option<Account>>;

    /// All accounts in id order
    async fn get_all(&self) -> DbResult<Vec<Account>>;

    /// Removes the record. Deleting an unknown id is a no-op.
    async fn delete_account(&self, account_id: AccountId) -> DbResult<()>;
}
