//! Typed request bodies for the admin endpoints.
//!
//! Missing fields deserialize to empty values and are rejected by
//! `validate`, so a missing field and a blank one produce the same message.

use serde::Deserialize;
use zenith_core::application::ApplicationStatus;
use zenith_core::error::CoreError;
use zenith_core::types::ApplicationId;
use zenith_mail::{InterviewDetails, TaskDetails};

pub const NO_IDS: &str = "No ids supplied";
pub const INTERVIEW_FIELDS_REQUIRED: &str =
    "interviewDate, interviewTime and meetingLink are required";
pub const TASK_FIELDS_REQUIRED: &str = "taskDescription and taskDeadline are required";

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require_ids(ids: &[ApplicationId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation(NO_IDS.to_string()));
    }
    Ok(())
}

/// Body of `PATCH /applications/{id}/status`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: String,
}

impl UpdateStatusRequest {
    pub fn validate(&self) -> Result<ApplicationStatus, CoreError> {
        self.status
            .trim()
            .parse::<ApplicationStatus>()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

/// Body of `DELETE /applications`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteApplicationsRequest {
    pub ids: Vec<ApplicationId>,
}

impl DeleteApplicationsRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_ids(&self.ids)
    }
}

/// Body of `POST /applications/shortlist`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShortlistRequest {
    pub ids: Vec<ApplicationId>,
    pub interview_date: String,
    pub interview_time: String,
    pub meeting_link: String,
}

impl ShortlistRequest {
    pub fn validate(&self) -> Result<InterviewDetails, CoreError> {
        require_ids(&self.ids)?;
        if blank(&self.interview_date) || blank(&self.interview_time) || blank(&self.meeting_link)
        {
            return Err(CoreError::Validation(INTERVIEW_FIELDS_REQUIRED.to_string()));
        }
        Ok(InterviewDetails {
            date: self.interview_date.trim().to_string(),
            time: self.interview_time.trim().to_string(),
            meeting_link: self.meeting_link.trim().to_string(),
        })
    }
}

/// Body of `POST /applications/send-task`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SendTaskRequest {
    pub ids: Vec<ApplicationId>,
    pub task_description: String,
    pub task_deadline: String,
    pub task_link: Option<String>,
}

impl SendTaskRequest {
    pub fn validate(&self) -> Result<TaskDetails, CoreError> {
        require_ids(&self.ids)?;
        if blank(&self.task_description) || blank(&self.task_deadline) {
            return Err(CoreError::Validation(TASK_FIELDS_REQUIRED.to_string()));
        }
        Ok(TaskDetails {
            description: self.task_description.trim().to_string(),
            deadline: self.task_deadline.trim().to_string(),
            link: self
                .task_link
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn status_must_be_a_known_value() {
        let ok = UpdateStatusRequest {
            status: "task_sent".into(),
        };
        assert_eq!(ok.validate().unwrap(), ApplicationStatus::TaskSent);

        let bad = UpdateStatusRequest {
            status: "archived".into(),
        };
        assert_matches!(bad.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn missing_fields_deserialize_to_empty_and_fail_validation() {
        let req: ShortlistRequest = serde_json::from_str(r#"{"ids": []}"#).unwrap();
        assert_matches!(req.validate(), Err(CoreError::Validation(m)) if m == NO_IDS);

        let req: ShortlistRequest = serde_json::from_value(serde_json::json!({
            "ids": [Uuid::new_v4()],
            "interviewDate": "2025-02-01",
            "interviewTime": "   ",
            "meetingLink": "https://meet.google.com/abc",
        }))
        .unwrap();
        assert_matches!(
            req.validate(),
            Err(CoreError::Validation(m)) if m == INTERVIEW_FIELDS_REQUIRED
        );
    }

    #[test]
    fn task_link_is_optional_and_blank_counts_as_absent() {
        let req: SendTaskRequest = serde_json::from_value(serde_json::json!({
            "ids": [Uuid::new_v4()],
            "taskDescription": "Build a landing page",
            "taskDeadline": "Friday",
            "taskLink": "  ",
        }))
        .unwrap();
        let details = req.validate().unwrap();
        assert_eq!(details.link, None);
        assert_eq!(details.deadline, "Friday");
    }

    #[test]
    fn task_requires_description_and_deadline() {
        let req = SendTaskRequest {
            ids: vec![Uuid::new_v4()],
            task_description: "Do it".into(),
            ..Default::default()
        };
        assert_matches!(
            req.validate(),
            Err(CoreError::Validation(m)) if m == TASK_FIELDS_REQUIRED
        );
    }
}
