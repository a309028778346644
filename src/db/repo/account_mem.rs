use crate::db::error::DbError;
use crate::db::repo::account::AccountRepo;
use crate::db::DbResult;
use crate::models::account::{Account, AccountInput};
use crate::models::types::AccountId;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-local account store. Contents are lost on restart.
pub struct MemoryAccountRepository {
    accounts: DashMap<AccountId, Account>,
    next_id: AtomicI64,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepo for MemoryAccountRepository {
    async fn insert_account(&self, input: AccountInput) -> DbResult<Account> {
        let id = AccountId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let account = Account::from_input(id, input);
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn save_account(&self, account: Account) -> DbResult<Account> {
        let mut entry = self.accounts.get_mut(&account.id).ok_or(DbError::NotFound)?;
        *entry = account.clone();
        Ok(account)
    }

    async fn get_by_id(&self, account_id: AccountId) -> DbResult<Option<Account>> {
        Ok(self.accounts.get(&account_id).map(|a| a.value().clone()))
    }

    async fn get_all(&self) -> DbResult<Vec<Account>> {
        let mut all: Vec<Account> = self.accounts.iter().map(|a| a.value().clone()).collect();
        all.sort_by_key(|a| a.id);
        Ok(all)
    }

    async fn delete_account(&self, account_id: AccountId) -> DbResult<()> {
        self.accounts.remove(&account_id);
        Ok(())
    }
}
