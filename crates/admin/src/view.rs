//! Render-ready view of an [`ApplicationsBoard`].

use std::collections::HashMap;

use zenith_core::application::{Application, ApplicationStatus};
use zenith_core::types::ApplicationId;

use crate::board::ApplicationsBoard;

pub const EMPTY_STATE: &str = "No applications received yet. Submit a test application from the Careers page and click “Refresh”.";
pub const WORKING_LABEL: &str = "Working…";
pub const SHORTLIST_LABEL: &str = "Shortlist & Send Interview Email";
pub const TASK_LABEL: &str = "Send Task Email";

/// Job titles keyed by slug, as published on the careers page.
#[derive(Debug, Clone, Default)]
pub struct JobDirectory {
    titles: HashMap<String, String>,
}

impl JobDirectory {
    pub fn new<I, S, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            titles: entries
                .into_iter()
                .map(|(slug, title)| (slug.into(), title.into()))
                .collect(),
        }
    }

    /// The posting's title, or the slug itself when the posting is unknown.
    pub fn title_for(&self, slug: Option<&str>) -> String {
        let slug = slug.unwrap_or_default();
        self.titles
            .get(slug)
            .cloned()
            .unwrap_or_else(|| slug.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeCell {
    Link(String),
    /// Rendered as `-`.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ApplicationId,
    pub selected: bool,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub job_slug: String,
    pub cover_letter: Option<String>,
    pub resume: ResumeCell,
    pub status: ApplicationStatus,
    pub applied_at: String,
}

/// Toolbar labels and enabled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarView {
    pub selected_label: String,
    pub shortlist_label: &'static str,
    pub task_label: &'static str,
    pub all_selected: bool,
    pub bulk_disabled: bool,
    pub delete_disabled: bool,
}

/// What goes below the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Loading,
    Error(String),
    Empty(&'static str),
    Rows(Vec<RowView>),
}

/// Choices offered by the per-row status control.
pub fn status_options() -> [&'static str; 7] {
    ApplicationStatus::ALL.map(ApplicationStatus::as_str)
}

fn row(app: &Application, selected: bool, jobs: &JobDirectory) -> RowView {
    RowView {
        id: app.id,
        selected,
        name: app.name.clone(),
        email: app.email.clone(),
        job_title: jobs.title_for(app.job_slug.as_deref()),
        job_slug: app.job_slug.clone().unwrap_or_default(),
        cover_letter: app.cover_letter.clone().filter(|c| !c.is_empty()),
        resume: match app.resume_url.as_deref() {
            Some(url) if !url.is_empty() => ResumeCell::Link(url.to_string()),
            _ => ResumeCell::Missing,
        },
        status: app.status,
        applied_at: app.created_at.format("%Y-%m-%d %H:%M").to_string(),
    }
}

impl ApplicationsBoard {
    pub fn toolbar(&self) -> ToolbarView {
        let busy = self.is_loading() || self.is_in_flight();
        let disabled = self.selection().is_empty() || busy;
        let (shortlist_label, task_label) = if self.is_in_flight() {
            (WORKING_LABEL, WORKING_LABEL)
        } else {
            (SHORTLIST_LABEL, TASK_LABEL)
        };

        ToolbarView {
            selected_label: format!("{} selected", self.selected_count()),
            shortlist_label,
            task_label,
            all_selected: self.all_selected(),
            bulk_disabled: disabled,
            delete_disabled: disabled,
        }
    }

    pub fn body(&self, jobs: &JobDirectory) -> BodyView {
        if self.is_loading() {
            return BodyView::Loading;
        }
        if let Some(error) = self.error() {
            return BodyView::Error(error.to_string());
        }
        if self.applications().is_empty() {
            return BodyView::Empty(EMPTY_STATE);
        }

        BodyView::Rows(
            self.applications()
                .iter()
                .map(|app| row(app, self.selection().contains(app.id), jobs))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_title_falls_back_to_slug() {
        let jobs = JobDirectory::new([("seo-specialist", "SEO Specialist")]);
        assert_eq!(jobs.title_for(Some("seo-specialist")), "SEO Specialist");
        assert_eq!(jobs.title_for(Some("unknown-role")), "unknown-role");
        assert_eq!(jobs.title_for(None), "");
    }

    #[test]
    fn status_options_follow_enumeration_order() {
        assert_eq!(
            status_options(),
            ["new", "contacted", "interview", "hired", "rejected", "shortlisted", "task_sent"]
        );
    }
}
