//! Repository for the `applications` table.

use sqlx::PgPool;
use zenith_core::application::{ApplicationStatus, NewApplication};
use zenith_core::types::ApplicationId;

use crate::models::application::{ApplicationRow, ContactRow};

/// Column list for `applications` queries.
const COLUMNS: &str = "\
    id, name, email, cover_letter, resume_url, job_slug, status, \
    created_at, updated_at";

/// Provides CRUD operations for job applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewApplication,
    ) -> Result<ApplicationRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (name, email, cover_letter, resume_url, job_slug, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.cover_letter.as_deref())
            .bind(input.resume_url.as_deref())
            .bind(input.job_slug.as_deref())
            .bind(input.status.map(ApplicationStatus::as_str))
            .fetch_one(pool)
            .await
    }

    /// List every application, newest first. `id` breaks ties so the order is stable.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ApplicationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications \
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, ApplicationRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch the addressing fields for the given IDs. Unknown IDs are skipped.
    pub async fn find_contacts(
        pool: &PgPool,
        ids: &[ApplicationId],
    ) -> Result<Vec<ContactRow>, sqlx::Error> {
        sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, job_slug FROM applications \
             WHERE id = ANY($1) \
             ORDER BY created_at DESC, id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Set the status of a single application and bump `updated_at`.
    ///
    /// Returns `None` if no application with the given ID exists.
    pub async fn update_status(
        pool: &PgPool,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<ApplicationRow>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Set the status of every listed application in one statement.
    ///
    /// Returns the number of rows updated.
    pub async fn update_status_many(
        pool: &PgPool,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE applications SET status = $2, updated_at = NOW() \
             WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(status.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete every listed application in one statement.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_many(pool: &PgPool, ids: &[ApplicationId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
