//! Operator input for the two bulk email actions.

use zenith_core::types::ApplicationId;

use crate::client::{ShortlistPayload, TaskPayload};

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Interview date, time and meeting link for shortlist emails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewForm {
    pub date: String,
    pub time: String,
    pub meeting_link: String,
}

impl InterviewForm {
    pub fn is_complete(&self) -> bool {
        filled(&self.date) && filled(&self.time) && filled(&self.meeting_link)
    }

    /// `None` until every field is filled in.
    pub fn payload(&self, ids: &[ApplicationId]) -> Option<ShortlistPayload> {
        self.is_complete().then(|| ShortlistPayload {
            ids: ids.to_vec(),
            interview_date: self.date.clone(),
            interview_time: self.time.clone(),
            meeting_link: self.meeting_link.clone(),
        })
    }
}

/// Task description, deadline and optional link for task emails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub description: String,
    pub deadline: String,
    pub link: String,
}

impl TaskForm {
    pub fn is_complete(&self) -> bool {
        filled(&self.description) && filled(&self.deadline)
    }

    /// `None` until description and deadline are filled in. A blank link is
    /// left out of the payload.
    pub fn payload(&self, ids: &[ApplicationId]) -> Option<TaskPayload> {
        self.is_complete().then(|| TaskPayload {
            ids: ids.to_vec(),
            task_description: self.description.clone(),
            task_deadline: self.deadline.clone(),
            task_link: filled(&self.link).then(|| self.link.clone()),
        })
    }
}
