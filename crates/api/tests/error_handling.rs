mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use zenith_api::bulk::Notifier;
use zenith_api::router::build_app_router;
use zenith_api::state::AppState;
use zenith_core::application::{
    Application, ApplicationContact, ApplicationStatus, NewApplication,
};
use zenith_core::types::ApplicationId;
use zenith_db::{ApplicationStore, MemoryApplicationStore, StoreError};
use zenith_mail::Letterhead;

use common::{
    application, body_json, build_test_app, expect_error, get, send_json, send_raw, test_config,
    RecordingMailer,
};

/// Store whose every call fails the way an unreachable database would.
struct DownStore;

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl ApplicationStore for DownStore {
    async fn list_all(&self) -> Result<Vec<Application>, StoreError> {
        Err(down())
    }

    async fn find_contacts(
        &self,
        _ids: &[ApplicationId],
    ) -> Result<Vec<ApplicationContact>, StoreError> {
        Err(down())
    }

    async fn update_status(
        &self,
        _id: ApplicationId,
        _status: ApplicationStatus,
    ) -> Result<Option<Application>, StoreError> {
        Err(down())
    }

    async fn update_status_many(
        &self,
        _ids: &[ApplicationId],
        _status: ApplicationStatus,
    ) -> Result<u64, StoreError> {
        Err(down())
    }

    async fn delete_many(&self, _ids: &[ApplicationId]) -> Result<u64, StoreError> {
        Err(down())
    }

    async fn insert(&self, _input: NewApplication) -> Result<Application, StoreError> {
        Err(down())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

/// Write operation that [`BrokenWrites`] fails.
#[derive(Clone, Copy, PartialEq)]
enum Write {
    Status,
    StatusMany,
    Delete,
}

/// In-memory store whose reads work and whose chosen write fails.
struct BrokenWrites {
    inner: MemoryApplicationStore,
    broken: Write,
}

impl BrokenWrites {
    fn new(applications: Vec<Application>, broken: Write) -> Self {
        Self {
            inner: MemoryApplicationStore::with_applications(applications),
            broken,
        }
    }

    fn check(&self, op: Write) -> Result<(), StoreError> {
        if self.broken == op {
            return Err(StoreError::Unavailable("write rejected".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ApplicationStore for BrokenWrites {
    async fn list_all(&self) -> Result<Vec<Application>, StoreError> {
        self.inner.list_all().await
    }

    async fn find_contacts(
        &self,
        ids: &[ApplicationId],
    ) -> Result<Vec<ApplicationContact>, StoreError> {
        self.inner.find_contacts(ids).await
    }

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, StoreError> {
        self.check(Write::Status)?;
        self.inner.update_status(id, status).await
    }

    async fn update_status_many(
        &self,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> Result<u64, StoreError> {
        self.check(Write::StatusMany)?;
        self.inner.update_status_many(ids, status).await
    }

    async fn delete_many(&self, ids: &[ApplicationId]) -> Result<u64, StoreError> {
        self.check(Write::Delete)?;
        self.inner.delete_many(ids).await
    }

    async fn insert(&self, input: NewApplication) -> Result<Application, StoreError> {
        self.inner.insert(input).await
    }
}

fn app_with_down_store() -> (axum::Router, Arc<RecordingMailer>) {
    app_with_store(Arc::new(DownStore))
}

fn app_with_store(store: Arc<dyn ApplicationStore>) -> (axum::Router, Arc<RecordingMailer>) {
    let config = test_config();
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState {
        store,
        notifier: Arc::new(Notifier::new(
            mailer.clone(),
            common::FROM,
            Letterhead::default(),
        )),
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), mailer)
}

#[tokio::test]
async fn store_failure_on_list_is_500_with_message() {
    let (router, _) = app_with_down_store();

    let response = get(&router, "/api/admin/applications").await;
    let message = expect_error(response, StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR").await;
    assert_eq!(message, "connection refused");
}

#[tokio::test]
async fn store_failure_on_fetch_aborts_before_any_email() {
    let (router, mailer) = app_with_down_store();

    let response = send_json(
        &router,
        Method::POST,
        "/api/admin/applications/shortlist",
        json!({
            "ids": [Uuid::new_v4()],
            "interviewDate": "2025-03-10",
            "interviewTime": "10:00",
            "meetingLink": "https://meet.google.com/x",
        }),
    )
    .await;
    expect_error(response, StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR").await;
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn status_write_failure_after_emails_is_500() {
    let a = application("A", "a@example.com", None, 1);
    let store = Arc::new(BrokenWrites::new(vec![a.clone()], Write::StatusMany));
    let (router, mailer) = app_with_store(store.clone());

    let response = send_json(
        &router,
        Method::POST,
        "/api/admin/applications/shortlist",
        json!({
            "ids": [a.id],
            "interviewDate": "2025-03-10",
            "interviewTime": "10:00",
            "meetingLink": "https://meet.google.com/x",
        }),
    )
    .await;
    let message = expect_error(response, StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR").await;
    assert_eq!(message, "write rejected");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@example.com");
    assert_eq!(store.inner.get(a.id).await.unwrap().status, ApplicationStatus::New);
}

#[tokio::test]
async fn store_failure_on_status_update_is_500() {
    let a = application("A", "a@example.com", None, 1);
    let store = Arc::new(BrokenWrites::new(vec![a.clone()], Write::Status));
    let (router, _) = app_with_store(store.clone());

    let response = send_json(
        &router,
        Method::PATCH,
        &format!("/api/admin/applications/{}/status", a.id),
        json!({ "status": "hired" }),
    )
    .await;
    let message = expect_error(response, StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR").await;
    assert_eq!(message, "write rejected");
    assert_eq!(store.inner.get(a.id).await.unwrap().status, ApplicationStatus::New);
}

#[tokio::test]
async fn store_failure_on_delete_is_500() {
    let a = application("A", "a@example.com", None, 1);
    let store = Arc::new(BrokenWrites::new(vec![a.clone()], Write::Delete));
    let (router, _) = app_with_store(store.clone());

    let response = send_json(
        &router,
        Method::DELETE,
        "/api/admin/applications",
        json!({ "ids": [a.id] }),
    )
    .await;
    let message = expect_error(response, StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR").await;
    assert_eq!(message, "write rejected");
    assert_eq!(store.inner.len().await, 1);
}

#[tokio::test]
async fn health_reports_degraded_store() {
    let (router, _) = app_with_down_store();

    let response = get(&router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = build_test_app(vec![]);

    let response = send_raw(
        &app.router,
        Method::POST,
        "/api/admin/applications/send-task",
        "{ not json".to_string(),
    )
    .await;
    expect_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[tokio::test]
async fn non_uuid_ids_are_bad_request() {
    let a = application("A", "a@example.com", None, 1);
    let app = build_test_app(vec![a.clone()]);

    let response = send_json(
        &app.router,
        Method::DELETE,
        "/api/admin/applications",
        json!({ "ids": ["not-a-uuid"] }),
    )
    .await;
    expect_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;

    let response = send_json(
        &app.router,
        Method::PATCH,
        "/api/admin/applications/42/status",
        json!({ "status": "hired" }),
    )
    .await;
    expect_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;

    assert_eq!(app.store.get(a.id).await.unwrap(), a);
}
