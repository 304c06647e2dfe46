//! Typed HTTP client for the `/api/admin` endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use zenith_core::application::{Application, ApplicationStatus};
use zenith_core::types::ApplicationId;

/// Errors from the admin API client.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` is the server's
    /// `error` field, or the action's default message when it sent none.
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Body of `POST /applications/shortlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistPayload {
    pub ids: Vec<ApplicationId>,
    pub interview_date: String,
    pub interview_time: String,
    pub meeting_link: String,
}

/// Body of `POST /applications/send-task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub ids: Vec<ApplicationId>,
    pub task_description: String,
    pub task_deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_link: Option<String>,
}

/// The five admin operations the dashboard performs.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_applications(&self) -> Result<Vec<Application>, AdminError>;

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, AdminError>;

    async fn delete_applications(&self, ids: &[ApplicationId]) -> Result<(), AdminError>;

    async fn shortlist(&self, payload: &ShortlistPayload) -> Result<(), AdminError>;

    async fn send_task(&self, payload: &TaskPayload) -> Result<(), AdminError>;
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// [`AdminApi`] over HTTP using [`reqwest`].
pub struct HttpAdminClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAdminClient {
    /// * `base_url` - Server origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/admin/applications{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`AdminError::Api`], preferring the
    /// server's own message over `default_message`.
    async fn ensure_success(
        response: reqwest::Response,
        default_message: &str,
    ) -> Result<reqwest::Response, AdminError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_message.to_string());

        tracing::warn!(status = status.as_u16(), %message, "Admin API request failed");

        Err(AdminError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AdminApi for HttpAdminClient {
    async fn list_applications(&self) -> Result<Vec<Application>, AdminError> {
        let response = self.client.get(self.url("")).send().await?;
        let response = Self::ensure_success(response, "Failed to fetch applications").await?;

        let envelope: DataEnvelope<Vec<Application>> = response.json().await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, AdminError> {
        let response = self
            .client
            .patch(self.url(&format!("/{id}/status")))
            .json(&json!({ "status": status }))
            .send()
            .await?;
        let response = Self::ensure_success(response, "Failed to update status").await?;

        let envelope: DataEnvelope<Application> = response.json().await?;
        envelope.data.ok_or_else(|| AdminError::Api {
            status: 200,
            message: "Failed to update status".to_string(),
        })
    }

    async fn delete_applications(&self, ids: &[ApplicationId]) -> Result<(), AdminError> {
        let response = self
            .client
            .delete(self.url(""))
            .json(&json!({ "ids": ids }))
            .send()
            .await?;
        Self::ensure_success(response, "Failed to delete applications").await?;
        Ok(())
    }

    async fn shortlist(&self, payload: &ShortlistPayload) -> Result<(), AdminError> {
        let response = self
            .client
            .post(self.url("/shortlist"))
            .json(payload)
            .send()
            .await?;
        Self::ensure_success(response, "Failed to shortlist and send emails").await?;
        Ok(())
    }

    async fn send_task(&self, payload: &TaskPayload) -> Result<(), AdminError> {
        let response = self
            .client
            .post(self.url("/send-task"))
            .json(payload)
            .send()
            .await?;
        Self::ensure_success(response, "Failed to send task emails").await?;
        Ok(())
    }
}
