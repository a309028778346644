use crate::config::{Config, StorageKind};
use crate::db::Db;
use crate::db::repo::{AccountRepo, AccountRepository, MemoryAccountRepository};
use crate::services::AccountService;
use std::sync::Arc;

pub struct Repos {
    pub account: Arc<dyn AccountRepo>,
}

pub struct Services {
    pub account: Arc<AccountService>,
}

pub struct Registry {
    pub repos: Arc<Repos>,
    pub services: Arc<Services>,
    pub config: Arc<Config>,
}

impl Registry {
    pub fn new(account_repo: Arc<dyn AccountRepo>, config: Arc<Config>) -> Self {
        let repos = Arc::new(Repos { account: account_repo });

        let services = Arc::new(Services {
            account: Arc::new(AccountService::new(repos.account.clone())),
        });

        Self { repos, services, config }
    }

    /// Builds the registry on top of the storage configured in `config`. For postgres this
    /// connects the pool and makes sure the accounts table exists.
    pub async fn from_config(config: Arc<Config>) -> anyhow::Result<Self> {
        let repo: Arc<dyn AccountRepo> = match config.storage {
            StorageKind::Postgres => {
                let db = Arc::new(Db::new(&config.database_url, config.pool_max_size)?);
                db.init().await?;
                Arc::new(AccountRepository::new(db))
            }
            StorageKind::Memory => {
                tracing::warn!("using in-memory storage, accounts are lost on shutdown");
                Arc::new(MemoryAccountRepository::new())
            }
        };

        Ok(Self::new(repo, config))
    }

    pub fn in_memory(config: Arc<Config>) -> Self {
        Self::new(Arc::new(MemoryAccountRepository::new()), config)
    }
}
