use super::{Db, DbResult};

const CREATE_ACCOUNTS: &str = r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id       BIGSERIAL PRIMARY KEY,
        name     TEXT NOT NULL,
        document TEXT NOT NULL,
        phone    TEXT NOT NULL
    )
"#;

impl Db {
    /// Creates the accounts table when it does not exist yet (idempotent).
    pub async fn init(&self) -> DbResult<()> {
        let client = self.get_client().await?;
        client.batch_execute(CREATE_ACCOUNTS).await?;

        tracing::debug!("accounts table ready");
        Ok(())
    }
}
