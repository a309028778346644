use crate::db::error::DbError;
use crate::db::repo::AccountRepo;
use crate::error::{AppResult, DomainError};
use crate::models::account::{Account, AccountInput};
use crate::models::types::AccountId;
use std::sync::Arc;

pub struct AccountService {
    repo: Arc<dyn AccountRepo>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepo>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: AccountInput) -> AppResult<Account> {
        input.validate()?;

        let account = self.repo.insert_account(input).await?;
        tracing::info!(account_id = %account.id, "account created");
        Ok(account)
    }

    pub async fn get_all(&self) -> AppResult<Vec<Account>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get_by_id(&self, account_id: AccountId) -> AppResult<Option<Account>> {
        Ok(self.repo.get_by_id(account_id).await?)
    }

    /// Replaces name, document and phone of an existing account. Values are stored as given,
    /// the creation rules are not applied here.
    pub async fn update(&self, account_id: AccountId, input: AccountInput) -> AppResult<Option<Account>> {
        let Some(existing) = self.repo.get_by_id(account_id).await? else {
            return Ok(None);
        };

        match self.repo.save_account(Account::merged(existing, input)).await {
            Ok(account) => {
                tracing::info!(%account_id, "account updated");
                Ok(Some(account))
            }
            // Deleted between lookup and save
            Err(DbError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_by_id(&self, account_id: AccountId) -> AppResult<()> {
        let Some(account) = self.repo.get_by_id(account_id).await? else {
            return Err(DomainError::NotFound { id: account_id });
        };

        self.repo.delete_account(account.id).await?;
        tracing::info!(%account_id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repo::MemoryAccountRepository;

    fn service() -> AccountService {
        AccountService::new(Arc::new(MemoryAccountRepository::new()))
    }

    fn valid() -> AccountInput {
        AccountInput::new("Conta Teste", "01234567890", "11987654321")
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_fields() {
        let svc = service();
        let account = svc.create(valid()).await.unwrap();

        assert_eq!(account.name, "Conta Teste");
        assert_eq!(account.document, "01234567890");
        assert_eq!(account.phone, "11987654321");
        assert_eq!(svc.get_by_id(account.id).await.unwrap(), Some(account));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_storing() {
        let svc = service();
        let err = svc.create(AccountInput { name: "".into(), ..valid() }).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation { field: "name", .. }));
        assert_eq!(err.to_string(), "[name] must not be blank");
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_is_stable_without_writes() {
        let svc = service();
        svc.create(valid()).await.unwrap();
        svc.create(AccountInput { name: "Outra Conta".into(), ..valid() }).await.unwrap();

        let first = svc.get_all().await.unwrap();
        let second = svc.get_all().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_none() {
        assert!(service().get_by_id(AccountId(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let svc = service();
        let created = svc.create(valid()).await.unwrap();

        let updated = svc
            .update(created.id, AccountInput::new("Updated", "98765432100", "11911112222"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Updated");
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_does_not_apply_creation_rules() {
        let svc = service();
        let created = svc.create(valid()).await.unwrap();

        let updated = svc.update(created.id, AccountInput::new("", "1", "2")).await.unwrap().unwrap();
        assert_eq!(updated.name, "");
        assert_eq!(updated.document, "1");
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_none() {
        let svc = service();
        let result = svc.update(AccountId(9), AccountInput::new("", "", "")).await.unwrap();

        assert!(result.is_none());
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_account() {
        let svc = service();
        let created = svc.create(valid()).await.unwrap();

        svc.delete_by_id(created.id).await.unwrap();
        assert!(svc.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let err = service().delete_by_id(AccountId(3)).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { id: AccountId(3) }));
        assert_eq!(err.to_string(), "Id 3 not found!");
    }
}
