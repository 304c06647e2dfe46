#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use zenith_api::bulk::Notifier;
use zenith_api::config::ServerConfig;
use zenith_api::router::build_app_router;
use zenith_api::state::AppState;
use zenith_core::application::{Application, ApplicationStatus};
use zenith_db::MemoryApplicationStore;
use zenith_mail::{Letterhead, MailError, Mailer, OutgoingEmail, SendReceipt};

pub const FROM: &str = "ZenithView HR <onboarding@resend.dev>";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
    }
}

/// Mailer that records every email and rejects the addresses in `fail_for`.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail_for: Vec<String>,
}

impl RecordingMailer {
    pub fn failing_for(addresses: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: addresses.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        if self.fail_for.contains(&email.to) {
            return Err(MailError::Provider {
                status: 500,
                message: "provider unavailable".into(),
            });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(SendReceipt {
            id: Some(Uuid::new_v4().to_string()),
        })
    }
}

/// Everything a test needs to drive the app and inspect its collaborators.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryApplicationStore>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn build_test_app(applications: Vec<Application>) -> TestApp {
    build_test_app_with(applications, RecordingMailer::default())
}

/// Build the full application router with all middleware layers over an
/// in-memory store and the given mailer.
pub fn build_test_app_with(applications: Vec<Application>, mailer: RecordingMailer) -> TestApp {
    let store = Arc::new(MemoryApplicationStore::with_applications(applications));
    let mailer = Arc::new(mailer);
    let config = test_config();

    let state = AppState {
        store: store.clone(),
        notifier: Arc::new(Notifier::new(mailer.clone(), FROM, Letterhead::default())),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        mailer,
    }
}

/// An application submitted `minutes_ago` minutes in the past.
pub fn application(name: &str, email: &str, job_slug: Option<&str>, minutes_ago: i64) -> Application {
    let created = Utc::now() - Duration::minutes(minutes_ago);
    Application {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        cover_letter: None,
        resume_url: None,
        job_slug: job_slug.map(str::to_string),
        status: ApplicationStatus::New,
        created_at: created,
        updated_at: created,
    }
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response {
    send_raw(app, method, uri, body.to_string()).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Assert an error envelope and return its message.
pub async fn expect_error(response: Response, status: StatusCode, code: &str) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    json["error"].as_str().unwrap().to_string()
}
