//! `HttpAdminClient` against the real router served on a loopback port.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use uuid::Uuid;
use zenith_admin::{AdminApi, AdminError, HttpAdminClient, ShortlistPayload, TaskPayload};
use zenith_api::bulk::Notifier;
use zenith_api::config::ServerConfig;
use zenith_api::router::build_app_router;
use zenith_api::state::AppState;
use zenith_core::application::{Application, ApplicationStatus};
use zenith_db::MemoryApplicationStore;
use zenith_mail::{Letterhead, MailError, Mailer, OutgoingEmail, SendReceipt};

use common::application;

struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        Ok(SendReceipt::default())
    }
}

async fn serve(rows: Vec<Application>) -> (HttpAdminClient, Arc<MemoryApplicationStore>) {
    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec![],
        request_timeout_secs: 30,
        database_url: "postgres://unused".into(),
    };
    let store = Arc::new(MemoryApplicationStore::with_applications(rows));
    let state = AppState {
        store: store.clone(),
        notifier: Arc::new(Notifier::new(
            Arc::new(NullMailer),
            "HR <hr@example.com>",
            Letterhead::default(),
        )),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (HttpAdminClient::new(format!("http://{addr}")), store)
}

#[tokio::test]
async fn lists_and_updates_over_http() {
    let a = application("Alice", Some("web-developer"), 1);
    let (client, store) = serve(vec![a.clone()]).await;

    let listed = client.list_applications().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, a.id);

    let updated = client
        .update_status(a.id, ApplicationStatus::Contacted)
        .await
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Contacted);
    assert_eq!(
        store.get(a.id).await.unwrap().status,
        ApplicationStatus::Contacted
    );
}

#[tokio::test]
async fn server_error_message_is_surfaced() {
    let (client, _) = serve(vec![]).await;

    let err = client
        .update_status(Uuid::new_v4(), ApplicationStatus::Hired)
        .await
        .unwrap_err();
    assert_matches!(err, AdminError::Api { status: 404, .. });

    let err = client
        .shortlist(&ShortlistPayload {
            ids: vec![Uuid::new_v4()],
            interview_date: "4 Nov 2025".into(),
            interview_time: String::new(),
            meeting_link: "https://meet.google.com/abc".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "interviewDate, interviewTime and meetingLink are required"
    );

    let err = client.delete_applications(&[]).await.unwrap_err();
    assert_eq!(err.to_string(), "No ids supplied");
}

#[tokio::test]
async fn bulk_actions_and_delete_over_http() {
    let a = application("Alice", None, 1);
    let b = application("Bob", None, 2);
    let (client, store) = serve(vec![a.clone(), b.clone()]).await;

    client
        .send_task(&TaskPayload {
            ids: vec![a.id],
            task_description: "Write a short essay".into(),
            task_deadline: "Monday".into(),
            task_link: None,
        })
        .await
        .unwrap();
    assert_eq!(
        store.get(a.id).await.unwrap().status,
        ApplicationStatus::TaskSent
    );

    client.delete_applications(&[b.id]).await.unwrap();
    assert!(store.get(b.id).await.is_none());
}
