use sqlx::FromRow;
use zenith_core::application::{Application, ApplicationContact, ApplicationStatus};
use zenith_core::types::{ApplicationId, Timestamp};

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub job_slug: Option<String>,
    pub status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        // The CHECK constraint keeps the column inside the enumeration.
        let status = ApplicationStatus::from_column(row.status.as_deref()).unwrap_or_else(|e| {
            tracing::warn!(application_id = %row.id, error = %e, "Unexpected status in row");
            ApplicationStatus::New
        });

        Application {
            id: row.id,
            name: row.name,
            email: row.email,
            cover_letter: row.cover_letter,
            resume_url: row.resume_url,
            job_slug: row.job_slug,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Projection used when addressing notification emails.
#[derive(Debug, Clone, FromRow)]
pub struct ContactRow {
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub job_slug: Option<String>,
}

impl From<ContactRow> for ApplicationContact {
    fn from(row: ContactRow) -> Self {
        ApplicationContact {
            id: row.id,
            name: row.name,
            email: row.email,
            job_slug: row.job_slug,
        }
    }
}
