//! Reminder generation: human-readable nudges from tracker output.
//!
//! Pure formatting — no retries, no external calls, and never a mention of
//! internal error codes or key syntax.

use serde::{Deserialize, Serialize};

use crate::content::field::FieldType;
use crate::material::submission::SubmissionState;
use crate::material::tracker::{MaterialItem, ProjectMaterialStatus};

/// What prompted the reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderTrigger {
    Scheduled,
    Manual,
    DeadlineApproaching,
}

/// Most labels shown before collapsing into a "+N more" suffix.
const DISPLAY_CAP: usize = 3;

/// Days of silence after which the scheduled phrasing firms up.
const STALE_AFTER_DAYS: i64 = 7;

/// Build a reminder message for the outstanding items in `status`.
/// Returns `None` when nothing is outstanding.
pub fn generate_reminder(status: &ProjectMaterialStatus, trigger: ReminderTrigger) -> Option<String> {
    let outstanding: Vec<&MaterialItem> = status.outstanding().collect();
    if outstanding.is_empty() {
        return None;
    }

    let opener = opener(status, trigger);
    let body = if outstanding.len() == 1 {
        single_item_line(outstanding[0])
    } else {
        summary_line(&outstanding)
    };

    Some(format!("{opener} {body}"))
}

fn opener(status: &ProjectMaterialStatus, trigger: ReminderTrigger) -> String {
    match trigger {
        ReminderTrigger::DeadlineApproaching => {
            "Your launch date is getting close and a few pieces are still open.".to_string()
        }
        ReminderTrigger::Manual => "Quick follow-up on your website content.".to_string(),
        ReminderTrigger::Scheduled => {
            match status.days_since_last_submission {
                Some(days) if days >= STALE_AFTER_DAYS => format!(
                    "It has been {days} days since we last received anything from you."
                ),
                Some(_) => "Thanks for the material so far; a few items are still open.".to_string(),
                None => "We have not received any content for your site yet.".to_string(),
            }
        }
    }
}

fn single_item_line(item: &MaterialItem) -> String {
    let label = item.label.to_lowercase();
    if item.state == SubmissionState::Rejected {
        return format!("We are still waiting for an updated {label}.");
    }
    if item.field_type.is_file() {
        format!("The only thing missing is the {label}. Could you upload it?")
    } else {
        format!("The only thing missing is the {label}. A short text is all we need.")
    }
}

fn summary_line(outstanding: &[&MaterialItem]) -> String {
    let images = outstanding.iter().filter(|i| i.field_type.is_file()).count();
    let texts = outstanding.len() - images;

    let mut labels: Vec<String> = outstanding
        .iter()
        .take(DISPLAY_CAP)
        .map(|i| i.label.to_lowercase())
        .collect();
    if outstanding.len() > DISPLAY_CAP {
        labels.push(format!("+{} more", outstanding.len() - DISPLAY_CAP));
    }
    let listed = labels.join(", ");

    let lead = if images > 0 && texts == 0 {
        "We still need a few images from you:"
    } else if texts > 0 && images == 0 {
        "We still need a few pieces of text from you:"
    } else {
        "We still need a mix of text and images from you:"
    };

    format!("{lead} {listed}.")
}
