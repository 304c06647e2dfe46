#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;
use zenith_admin::{AdminApi, AdminError, ShortlistPayload, TaskPayload};
use zenith_core::application::{Application, ApplicationStatus};
use zenith_core::types::ApplicationId;

/// In-process stand-in for the admin API.
///
/// Keeps its own rows, applies status changes the way the server does and
/// records every bulk payload it receives.
#[derive(Default)]
pub struct FakeApi {
    pub rows: Mutex<Vec<Application>>,
    pub list_calls: Mutex<usize>,
    pub shortlists: Mutex<Vec<ShortlistPayload>>,
    pub tasks: Mutex<Vec<TaskPayload>>,
    pub deleted: Mutex<Vec<ApplicationId>>,
    /// When set, every call fails with this server message.
    pub fail_with: Mutex<Option<String>>,
}

impl FakeApi {
    pub fn with_rows(rows: Vec<Application>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    fn check(&self) -> Result<(), AdminError> {
        match self.fail_with.lock().unwrap().clone() {
            Some(message) => Err(AdminError::Api {
                status: 500,
                message,
            }),
            None => Ok(()),
        }
    }

    fn set_status(&self, ids: &[ApplicationId], status: ApplicationStatus) {
        for row in self.rows.lock().unwrap().iter_mut() {
            if ids.contains(&row.id) {
                row.status = status;
                row.updated_at = Utc::now();
            }
        }
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn list_applications(&self) -> Result<Vec<Application>, AdminError> {
        *self.list_calls.lock().unwrap() += 1;
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, AdminError> {
        self.check()?;
        self.set_status(&[id], status);
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AdminError::Api {
                status: 404,
                message: format!("Application with id {id} not found"),
            })
    }

    async fn delete_applications(&self, ids: &[ApplicationId]) -> Result<(), AdminError> {
        self.check()?;
        self.rows.lock().unwrap().retain(|a| !ids.contains(&a.id));
        self.deleted.lock().unwrap().extend_from_slice(ids);
        Ok(())
    }

    async fn shortlist(&self, payload: &ShortlistPayload) -> Result<(), AdminError> {
        self.check()?;
        self.shortlists.lock().unwrap().push(payload.clone());
        self.set_status(&payload.ids, ApplicationStatus::Shortlisted);
        Ok(())
    }

    async fn send_task(&self, payload: &TaskPayload) -> Result<(), AdminError> {
        self.check()?;
        self.tasks.lock().unwrap().push(payload.clone());
        self.set_status(&payload.ids, ApplicationStatus::TaskSent);
        Ok(())
    }
}

pub fn application(name: &str, job_slug: Option<&str>, minutes_ago: i64) -> Application {
    let created = Utc::now() - Duration::minutes(minutes_ago);
    Application {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        cover_letter: None,
        resume_url: None,
        job_slug: job_slug.map(str::to_string),
        status: ApplicationStatus::New,
        created_at: created,
        updated_at: created,
    }
}
