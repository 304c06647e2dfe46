//! In-process [`ApplicationStore`] used by tests and local development.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use zenith_core::application::{Application, ApplicationContact, ApplicationStatus, NewApplication};
use zenith_core::types::ApplicationId;

use crate::store::{ApplicationStore, StoreError};

/// Applications held in a `Vec` behind a `RwLock`.
///
/// Mirrors the SQL store: listing is newest first with `id` as tie-breaker,
/// and every status write refreshes `updated_at`.
#[derive(Default)]
pub struct MemoryApplicationStore {
    rows: RwLock<Vec<Application>>,
}

impl MemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given records.
    pub fn with_applications(applications: Vec<Application>) -> Self {
        Self {
            rows: RwLock::new(applications),
        }
    }

    /// Snapshot of a single record, if present.
    pub async fn get(&self, id: ApplicationId) -> Option<Application> {
        self.rows.read().await.iter().find(|a| a.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ApplicationStore for MemoryApplicationStore {
    async fn list_all(&self) -> Result<Vec<Application>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn find_contacts(
        &self,
        ids: &[ApplicationId],
    ) -> Result<Vec<ApplicationContact>, StoreError> {
        let rows = self.list_all().await?;
        Ok(rows
            .iter()
            .filter(|a| ids.contains(&a.id))
            .map(ApplicationContact::from)
            .collect())
    }

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, StoreError> {
        let mut rows = self.rows.write().await;
        Ok(rows.iter_mut().find(|a| a.id == id).map(|app| {
            app.status = status;
            app.updated_at = Utc::now();
            app.clone()
        }))
    }

    async fn update_status_many(
        &self,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> Result<u64, StoreError> {
        let now = Utc::now();
        let mut rows = self.rows.write().await;
        let mut updated = 0;
        for app in rows.iter_mut().filter(|a| ids.contains(&a.id)) {
            app.status = status;
            app.updated_at = now;
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete_many(&self, ids: &[ApplicationId]) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|a| !ids.contains(&a.id));
        Ok((before - rows.len()) as u64)
    }

    async fn insert(&self, input: NewApplication) -> Result<Application, StoreError> {
        let now = Utc::now();
        let app = Application {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            cover_letter: input.cover_letter,
            resume_url: input.resume_url,
            job_slug: input.job_slug,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.push(app.clone());
        Ok(app)
    }
}
