//! The persistence collaborator seen by the HTTP layer.

use async_trait::async_trait;
use zenith_core::application::{Application, ApplicationContact, ApplicationStatus, NewApplication};
use zenith_core::types::ApplicationId;

use crate::repositories::ApplicationRepo;
use crate::DbPool;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database call failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store could not serve the request (used by non-SQL stores).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Select, update and delete over the `applications` table.
///
/// Every multi-row method is a single unit from the caller's point of view.
/// Status mutations always refresh `updated_at`.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Application>, StoreError>;

    async fn find_contacts(
        &self,
        ids: &[ApplicationId],
    ) -> Result<Vec<ApplicationContact>, StoreError>;

    /// Returns `None` when the ID does not exist.
    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, StoreError>;

    /// Returns the number of rows updated.
    async fn update_status_many(
        &self,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> Result<u64, StoreError>;

    /// Returns the number of rows removed.
    async fn delete_many(&self, ids: &[ApplicationId]) -> Result<u64, StoreError>;

    async fn insert(&self, input: NewApplication) -> Result<Application, StoreError>;

    /// Whether the backing store answers. Stores without a remote backend are always healthy.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// [`ApplicationStore`] backed by PostgreSQL through [`ApplicationRepo`].
#[derive(Clone)]
pub struct PgApplicationStore {
    pool: DbPool,
}

impl PgApplicationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn list_all(&self) -> Result<Vec<Application>, StoreError> {
        let rows = ApplicationRepo::list_all(&self.pool).await?;
        Ok(rows.into_iter().map(Application::from).collect())
    }

    async fn find_contacts(
        &self,
        ids: &[ApplicationId],
    ) -> Result<Vec<ApplicationContact>, StoreError> {
        let rows = ApplicationRepo::find_contacts(&self.pool, ids).await?;
        Ok(rows.into_iter().map(ApplicationContact::from).collect())
    }

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, StoreError> {
        let row = ApplicationRepo::update_status(&self.pool, id, status).await?;
        Ok(row.map(Application::from))
    }

    async fn update_status_many(
        &self,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> Result<u64, StoreError> {
        Ok(ApplicationRepo::update_status_many(&self.pool, ids, status).await?)
    }

    async fn delete_many(&self, ids: &[ApplicationId]) -> Result<u64, StoreError> {
        Ok(ApplicationRepo::delete_many(&self.pool, ids).await?)
    }

    async fn insert(&self, input: NewApplication) -> Result<Application, StoreError> {
        let row = ApplicationRepo::create(&self.pool, &input).await?;
        Ok(row.into())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
