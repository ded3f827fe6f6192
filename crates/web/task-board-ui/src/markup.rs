//! Markup for cards and the bulk-load summary
//!
//! Everything here is plain string building so it can be checked without a
//! browser. Every piece of task text goes through [`escape_html`].

use chrono::NaiveDate;
use std::fmt::Write;
use task_board_api::Task;

use crate::escape::escape_html;

pub const SUBMIT_BUSY_LABEL: &str = r#"<span class="loading"></span> Adding Magic..."#;
pub const LOAD_BUSY_LABEL: &str = r#"<span class="loading"></span> Loading Magic..."#;

pub const EMPTY_SUMMARY: &str = "<p>🎯 No tasks found in the database yet!</p>";
pub const SUMMARY_ERROR: &str = r#"<p style="color: red;">😱 Error loading data</p>"#;

const PENDING_BADGE: &str = "⏳ To Do";
const DONE_BADGE: &str = "✅ Done!";

/// `Oct 16, 2026`
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Inner markup of a freshly created task card
///
/// New cards always show the pending badge; the date is the day the card was
/// rendered, not the backend's creation time.
pub fn card_markup(task: &Task, rendered_on: NaiveDate) -> String {
    let mut html = format!("<h4>{}</h4>", escape_html(&task.title));
    if let Some(description) = task.description() {
        let _ = write!(html, "<p>{}</p>", escape_html(description));
    }
    let _ = write!(
        html,
        r#"<div class="task-meta"><span class="task-status pending">{}</span><span class="task-date">{}</span></div>"#,
        PENDING_BADGE,
        format_card_date(rendered_on)
    );
    html
}

/// Read-only summary of the whole collection
pub fn summary_markup(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let mut html = String::from(
        r#"<div style="text-align: left;"><h4>🎉 Tasks from Database:</h4><ul style="margin-top: 1rem;">"#,
    );
    for task in tasks {
        let _ = write!(
            html,
            r#"<li style="margin-bottom: 0.5rem;"><strong>{}</strong>"#,
            escape_html(&task.title)
        );
        if let Some(description) = task.description() {
            let _ = write!(html, " - {}", escape_html(description));
        }
        let badge = if task.completed { DONE_BADGE } else { PENDING_BADGE };
        let _ = write!(html, " ({})</li>", badge);
    }
    html.push_str("</ul></div>");
    html
}
