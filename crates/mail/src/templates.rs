//! HTML templates for candidate notifications.
//!
//! Both builders are pure. Every interpolated value is HTML-escaped, and
//! operator-supplied links only become anchors when they use a web or mail
//! scheme.

use zenith_core::application::{job_title, ApplicationContact};
use zenith_core::html::{escape, safe_href};

/// Organisation details printed in every email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letterhead {
    pub company_name: String,
    pub department: String,
    pub contact_email: String,
    pub phone: String,
    pub logo_url: String,
    pub interview_platform: String,
    pub timezone_label: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            company_name: "Zenithview Ltd.".into(),
            department: "HR & Admin Department".into(),
            contact_email: "hr@zenithview.com".into(),
            phone: "+880 1734-081581".into(),
            logo_url: "/logos/company logo.png".into(),
            interview_platform: "Google Meet".into(),
            timezone_label: "Bangladesh Time".into(),
        }
    }
}

/// Operator-supplied interview parameters. Free text, unvalidated in format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewDetails {
    pub date: String,
    pub time: String,
    pub meeting_link: String,
}

/// Operator-supplied task parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    pub description: String,
    pub deadline: String,
    pub link: Option<String>,
}

/// Subject line plus HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

const WRAPPER_OPEN: &str = r#"<div style="font-family: Arial, sans-serif; line-height: 1.7; color: #222; max-width: 650px; margin: auto; padding: 20px;">"#;

/// Interview invitation for a shortlisted candidate.
pub fn shortlist_email(
    contact: &ApplicationContact,
    details: &InterviewDetails,
    letterhead: &Letterhead,
) -> RenderedEmail {
    let title = job_title(contact.job_slug.as_deref());
    let name = escape(&contact.name);
    let title_html = escape(&title);
    let company = escape(&letterhead.company_name);
    let phone = escape(&letterhead.phone);

    let html = format!(
        r#"{WRAPPER_OPEN}
  <div style="text-align: center; margin-bottom: 25px;">
    <img src="{logo}" alt="Company Logo" style="max-width: 200px;" />
  </div>
  <p>Dear <b>{name}</b>,</p>
  <p>
    Thank you for your interest in joining <b>{company}</b> We are pleased to inform you that
    you have been <b>shortlisted for the 1st online interview</b> for the
    position of <b>{title_html}</b>.
  </p>
  <h3 style="margin-top: 20px; margin-bottom: 8px; color: #111;">Interview Details:</h3>
  <p><b>Date:</b> {date}</p>
  <p><b>Time:</b> {time} ({timezone})</p>
  <p><b>Platform:</b> {platform}</p>
  <p>
    <b>Meeting Link:</b><br/>
    {link}
  </p>
  <p>
    Please ensure a stable internet connection and a quiet environment during
    the interview. If you face any issues, feel free to contact us at
    <b>{phone}</b>.
  </p>
  <p>
    We look forward to speaking with you and learning more about your skills
    and experience.
  </p>
  <br/>
{signature}
</div>"#,
        logo = escape(&letterhead.logo_url),
        date = escape(&details.date),
        time = escape(&details.time),
        timezone = escape(&letterhead.timezone_label),
        platform = escape(&letterhead.interview_platform),
        link = render_link(&details.meeting_link, "font-size: 15px;"),
        signature = signature(letterhead),
    );

    RenderedEmail {
        subject: format!("Interview Invitation - {title}"),
        html,
    }
}

/// Take-home task assignment.
pub fn task_email(
    contact: &ApplicationContact,
    details: &TaskDetails,
    letterhead: &Letterhead,
) -> RenderedEmail {
    let title = job_title(contact.job_slug.as_deref());

    let link_section = details
        .link
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .map(|l| format!("\n  <p><b>Task Link:</b><br/>\n    {}\n  </p>", render_link(l, "")))
        .unwrap_or_default();

    let html = format!(
        r#"{WRAPPER_OPEN}
  <p>Dear {name},</p>
  <p>Thank you for applying for the <b>{title_html}</b> role.</p>
  <p><b>Here is your task:</b></p>
  <p><b>Description:</b><br/> {description}</p>
  <p><b>Deadline:</b> {deadline}</p>{link_section}
  <p>Please submit your work before the deadline.</p>
  <br/>
{signature}
</div>"#,
        name = escape(&contact.name),
        title_html = escape(&title),
        description = escape(&details.description),
        deadline = escape(&details.deadline),
        signature = signature(letterhead),
    );

    RenderedEmail {
        subject: format!("Task for {title} application"),
        html,
    }
}

fn render_link(url: &str, extra_style: &str) -> String {
    match safe_href(url) {
        Some(href) => format!(
            r#"<a href="{href}" target="_blank" style="color:#2563eb; {extra_style}">{href}</a>"#
        ),
        None => escape(url.trim()).into_owned(),
    }
}

fn signature(letterhead: &Letterhead) -> String {
    format!(
        "  <p>Best regards,</p>\n  <p><b>{}</b></p>\n  <p>{}</p>\n  <p>{}</p>\n  <p><b>{}</b></p>",
        escape(&letterhead.department),
        escape(&letterhead.contact_email),
        escape(&letterhead.phone),
        escape(&letterhead.company_name),
    )
}
