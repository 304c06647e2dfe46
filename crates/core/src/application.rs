//! Job application records and their pipeline status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{ApplicationId, Timestamp};

/// Shown in place of a job title when an application carries no slug.
pub const JOB_TITLE_FALLBACK: &str = "your applied position";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Hiring pipeline status of an application.
///
/// Stored as lowercase text. A NULL column is read back as [`ApplicationStatus::New`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    New,
    Contacted,
    Interview,
    Hired,
    Rejected,
    Shortlisted,
    TaskSent,
}

impl ApplicationStatus {
    /// Every status, in the order the dashboard offers them.
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::New,
        ApplicationStatus::Contacted,
        ApplicationStatus::Interview,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::TaskSent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::New => "new",
            ApplicationStatus::Contacted => "contacted",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Hired => "hired",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::TaskSent => "task_sent",
        }
    }

    /// Read a nullable status column, treating NULL as `new`.
    pub fn from_column(value: Option<&str>) -> Result<Self, UnknownStatus> {
        value.map_or(Ok(ApplicationStatus::New), |s| s.parse())
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status '{0}'. Expected one of: new, contacted, interview, hired, rejected, shortlisted, task_sent")]
pub struct UnknownStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

fn null_as_new<'de, D>(deserializer: D) -> Result<ApplicationStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<ApplicationStatus>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A candidate's submission for a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub job_slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_new")]
    pub status: ApplicationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The subset of an application needed to address a notification email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationContact {
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub job_slug: Option<String>,
}

impl From<&Application> for ApplicationContact {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id,
            name: app.name.clone(),
            email: app.email.clone(),
            job_slug: app.job_slug.clone(),
        }
    }
}

/// Fields accepted when recording a new application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub job_slug: Option<String>,
    pub status: Option<ApplicationStatus>,
}

// ---------------------------------------------------------------------------
// Job titles
// ---------------------------------------------------------------------------

/// Render a job slug as a title: hyphens become spaces and each word is capitalized.
///
/// ```
/// use zenith_core::application::job_title;
///
/// assert_eq!(job_title(Some("data-entry-clerk")), "Data Entry Clerk");
/// assert_eq!(job_title(None), "your applied position");
/// ```
pub fn job_title(job_slug: Option<&str>) -> String {
    let Some(slug) = job_slug.filter(|s| !s.is_empty()) else {
        return JOB_TITLE_FALLBACK.to_string();
    };

    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
