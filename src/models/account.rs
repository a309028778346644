use crate::db::DbResult;
use crate::error::{AppResult, DomainError};
use crate::models::types::AccountId;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

pub const NAME_MIN_LEN: usize = 5;
pub const DOCUMENT_MIN_LEN: usize = 11;
pub const PHONE_MIN_LEN: usize = 11;

/// A stored account. Only exists once the storage gateway has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub document: String,
    pub phone: String,
}

/// Account fields as submitted by a client. Any `id` in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInput {
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl Account {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, AccountId>("id")?,
            name: row.try_get("name")?,
            document: row.try_get("document")?,
            phone: row.try_get("phone")?,
        })
    }

    /// Builds the stored form of `input` under an id handed out by the gateway.
    pub fn from_input(id: AccountId, input: AccountInput) -> Self {
        Self {
            id,
            name: input.name,
            document: input.document,
            phone: input.phone,
        }
    }

    /// Keeps the id of `existing` and replaces name, document and phone together.
    pub fn merged(existing: Account, input: AccountInput) -> Self {
        Self::from_input(existing.id, input)
    }
}

impl AccountInput {
    pub fn new(name: impl Into<String>, document: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
            phone: phone.into(),
        }
    }

    /// Checks the creation rules in order and reports the first violation.
    pub fn validate(&self) -> AppResult<()> {
        require_not_blank("name", &self.name)?;
        require_min_len("name", &self.name, NAME_MIN_LEN, format!("must have at least {NAME_MIN_LEN} characters"))?;
        require_not_blank("document", &self.document)?;
        require_min_len("document", &self.document, DOCUMENT_MIN_LEN, format!("must have {DOCUMENT_MIN_LEN} characters"))?;
        require_not_blank("phone", &self.phone)?;
        require_min_len("phone", &self.phone, PHONE_MIN_LEN, format!("must have {PHONE_MIN_LEN} characters"))?;
        Ok(())
    }
}

fn require_not_blank(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation {
            field,
            message: "must not be blank".into(),
        });
    }
    Ok(())
}

fn require_min_len(field: &'static str, value: &str, min: usize, message: String) -> AppResult<()> {
    if value.chars().count() < min {
        return Err(DomainError::Validation { field, message });
    }
    Ok(())
}
