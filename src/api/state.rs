//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::PasswordHasher;
use crate::errors::AppResult;
use crate::infra::{AccountRepository, AccountStore, Database};
use crate::services::{AccountService, Registrar};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account registration service
    pub account_service: Arc<dyn AccountService>,
    /// Account store, also used for health checks
    pub accounts: Arc<dyn AccountRepository>,
}

impl AppState {
    /// Create application state backed by the database.
    ///
    /// # Errors
    /// Fails if the configured hashing parameters are invalid.
    pub fn from_config(database: &Database, config: &Config) -> AppResult<Self> {
        let accounts: Arc<dyn AccountRepository> =
            Arc::new(AccountStore::new(database.get_connection()));
        Self::with_store(accounts, config)
    }

    /// Create application state over any account store.
    pub fn with_store(accounts: Arc<dyn AccountRepository>, config: &Config) -> AppResult<Self> {
        let hasher = PasswordHasher::new(&config.hashing)?;
        tracing::debug!(?hasher, "Password hasher configured");

        let account_service = Arc::new(Registrar::new(accounts.clone(), hasher));
        Ok(Self::new(account_service, accounts))
    }

    /// Create new application state with manually injected services.
    pub fn new(
        account_service: Arc<dyn AccountService>,
        accounts: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            account_service,
            accounts,
        }
    }
}
