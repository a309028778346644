use crate::db::error::DbError;
use crate::db::repo::account::AccountRepo;
use crate::db::{Db, DbResult, map_row_opt, map_rows};
use crate::models::account::{Account, AccountInput};
use crate::models::types::AccountId;
use std::sync::Arc;

pub struct AccountRepository {
    db: Arc<Db>,
}

impl AccountRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl AccountRepo for AccountRepository {
    async fn insert_account(&self, input: AccountInput) -> DbResult<Account> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
                INSERT INTO accounts (name, document, phone)
                VALUES ($1, $2, $3)
                RETURNING id, name, document, phone
                "#,
            )
            .await?;

        let row = client
            .query_one(&stmt, &[&input.name, &input.document, &input.phone])
            .await?;

        Account::try_from_row(&row)
    }

    async fn save_account(&self, account: Account) -> DbResult<Account> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
                UPDATE accounts SET name = $2, document = $3, phone = $4
                WHERE id = $1
                RETURNING id, name, document, phone
                "#,
            )
            .await?;

        let row_opt = client
            .query_opt(&stmt, &[&account.id, &account.name, &account.document, &account.phone])
            .await?;

        map_row_opt(
            row_opt,
            Account::try_from_row,
            &format!("AccountRepo::save_account id={}", account.id),
        )?
        .ok_or(DbError::NotFound)
    }

    async fn get_by_id(&self, account_id: AccountId) -> DbResult<Option<Account>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT id, name, document, phone FROM accounts WHERE id = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&account_id]).await?;
        map_row_opt(
            row_opt,
            Account::try_from_row,
            &format!("AccountRepo::get_by_id id={}", account_id),
        )
    }

    async fn get_all(&self) -> DbResult<Vec<Account>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT id, name, document, phone FROM accounts ORDER BY id")
            .await?;

        let rows = client.query(&stmt, &[]).await?;
        map_rows(&rows, Account::try_from_row, "AccountRepo::get_all")
    }

    async fn delete_account(&self, account_id: AccountId) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client.prepare_cached("DELETE FROM accounts WHERE id = $1").await?;
        let affected = client.execute(&stmt, &[&account_id]).await?;
        if affected == 0 {
            tracing::debug!(%account_id, "delete of absent account ignored");
        }

        Ok(())
    }
}
