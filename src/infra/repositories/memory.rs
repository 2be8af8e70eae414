//! In-memory account store.
//!
//! Keeps accounts in a map keyed by email. Used by tests and local runs
//! that should not touch a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccountRepository;
use crate::domain::{Account, NewAccount};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Snapshot of all stored accounts
    pub async fn all(&self) -> Vec<Account> {
        self.accounts.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AppError::email_taken());
        }

        let account = Account::create(account);
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Password;

    fn new_account(name: &str, email: &str) -> NewAccount {
        NewAccount::new(
            name.to_string(),
            email.to_string(),
            Password::from_hash("hashed".to_string()),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryAccountStore::new();
        let created = store.create(new_account("Ada", "ada@example.com")).await.unwrap();

        let found = store.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(store.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let store = InMemoryAccountStore::new();
        store.create(new_account("Ada", "ada@example.com")).await.unwrap();

        let result = store.create(new_account("Other", "ada@example.com")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.find_by_email("ada@example.com").await.unwrap().unwrap().name,
            "Ada"
        );
    }

    #[tokio::test]
    async fn test_email_match_is_exact() {
        let store = InMemoryAccountStore::new();
        store.create(new_account("Ada", "ada@example.com")).await.unwrap();

        assert!(store.find_by_email("Ada@Example.com").await.unwrap().is_none());
    }
}
