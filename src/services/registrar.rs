//! Account registration service.
//!
//! Checks the email is free, hashes the password and persists the account.
//! The lookup is only a fast path: the store's own uniqueness check on
//! `create` decides concurrent duplicates.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Account, NewAccount, PasswordHasher};
use crate::errors::{AppError, AppResult};
use crate::infra::AccountRepository;

/// Account registration trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new account.
    ///
    /// Fails with [`AppError::Conflict`] if the email is already taken.
    async fn register(&self, name: String, email: String, password: String) -> AppResult<Account>;
}

/// Concrete implementation of AccountService over an account store.
pub struct Registrar {
    accounts: Arc<dyn AccountRepository>,
    hasher: PasswordHasher,
}

impl Registrar {
    /// Create new registrar with the account store and credential hasher
    pub fn new(accounts: Arc<dyn AccountRepository>, hasher: PasswordHasher) -> Self {
        Self { accounts, hasher }
    }
}

#[async_trait]
impl AccountService for Registrar {
    #[tracing::instrument(skip(self, name, password))]
    async fn register(&self, name: String, email: String, password: String) -> AppResult<Account> {
        // Input shape is validated by the handler's ValidatedJson extractor
        if self.accounts.find_by_email(&email).await?.is_some() {
            tracing::debug!("Email already registered");
            return Err(AppError::email_taken());
        }

        // Argon2 is CPU and memory bound; keep it off the async workers
        let hasher = self.hasher.clone();
        let credential = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

        let account = self
            .accounts
            .create(NewAccount::new(name, email, credential))
            .await?;

        tracing::info!(account_id = %account.id, "Account registered");
        Ok(account)
    }
}
