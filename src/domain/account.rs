//! Account domain entity and related types.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Password;

/// Account domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub credential: Password,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a freshly created account; identity and timestamp are assigned here.
    pub fn create(new: NewAccount) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            credential: new.credential,
            created_at: Utc::now(),
        }
    }
}

/// Data required to persist a new account. The credential is already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub credential: Password,
}

impl NewAccount {
    pub fn new(name: String, email: String, credential: Password) -> Self {
        Self {
            name,
            email,
            credential,
        }
    }
}
