use serde::{Deserialize, Serialize};

/// Identifier assigned by the storage gateway when an account is first stored.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    postgres_types::ToSql,
    postgres_types::FromSql,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
#[postgres(transparent)]
#[serde(transparent)] // JSON = plain number
pub struct AccountId(pub i64);

impl AccountId {
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for AccountId {
    type Err = core::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl From<i64> for AccountId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl From<AccountId> for i64 {
    fn from(v: AccountId) -> i64 {
        v.0
    }
}
