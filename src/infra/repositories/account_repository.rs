//! Account repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, Statement,
};

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use crate::domain::{Account, NewAccount};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account store trait for dependency injection.
///
/// Implementations must reject a second account with the same email on
/// `create` with [`AppError::Conflict`]; callers treat that as authoritative.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Persist a new account
    async fn create(&self, account: NewAccount) -> AppResult<Account>;

    /// Check the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let account = Account::create(account);
        let active_model = ActiveModel {
            id: Set(account.id),
            name: Set(account.name),
            email: Set(account.email),
            credential: Set(account.credential.into_string()),
            created_at: Set(account.created_at),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from_insert)?;
        Ok(Account::from(model))
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
