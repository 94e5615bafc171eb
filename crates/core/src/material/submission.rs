use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submitted material value: authored text or an uploaded file reference.
///
/// File geometry and size are whatever the upload pipeline reported; the
/// tracker never inspects file bytes itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MaterialValue {
    Text {
        text: String,
    },
    File {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_kb: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
}

impl MaterialValue {
    pub fn text(text: &str) -> Self {
        Self::Text {
            text: text.to_string(),
        }
    }

    pub fn file(url: &str) -> Self {
        Self::File {
            url: url.to_string(),
            width: None,
            height: None,
            size_kb: None,
            format: None,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

/// A reviewer's verdict on a submitted item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub decided_at: DateTime<Utc>,
}

/// Submission lifecycle state for one requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionState {
    Missing,
    Submitted,
    Approved,
    Rejected,
}

/// The latest submitted value for a requirement, plus any review verdict.
///
/// State is derived from timestamps, not stored: a decision made before the
/// latest `submitted_at` is stale, which is exactly the resubmission rule —
/// a rejected item that is submitted again reads as `Submitted`, never as
/// `Missing` and never silently as `Approved`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub value: MaterialValue,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewDecision>,
}

impl Submission {
    pub fn new(value: MaterialValue, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            submitted_at,
            review: None,
        }
    }

    /// Current state, derived from submission and decision timestamps.
    pub fn state(&self) -> SubmissionState {
        match &self.review {
            None => SubmissionState::Submitted,
            Some(decision) if decision.decided_at < self.submitted_at => {
                SubmissionState::Submitted
            }
            Some(decision) if decision.approved => SubmissionState::Approved,
            Some(_) => SubmissionState::Rejected,
        }
    }

    /// Whether this item was rejected at some point, even if a newer value
    /// has since been submitted. Drives the softer reminder phrasing.
    pub fn previously_rejected(&self) -> bool {
        self.review.as_ref().is_some_and(|d| !d.approved)
    }

    /// Record a new value, superseding any stale review verdict.
    pub fn resubmit(&mut self, value: MaterialValue, submitted_at: DateTime<Utc>) {
        self.value = value;
        self.submitted_at = submitted_at;
    }

    pub fn decide(&mut self, approved: bool, note: Option<String>, decided_at: DateTime<Utc>) {
        self.review = Some(ReviewDecision {
            approved,
            note,
            decided_at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn fresh_submission_is_submitted() {
        let s = Submission::new(MaterialValue::text("hello"), at(9));
        assert_eq!(s.state(), SubmissionState::Submitted);
        assert!(!s.previously_rejected());
    }

    #[test]
    fn decision_after_submission_sticks() {
        let mut s = Submission::new(MaterialValue::text("hello"), at(9));
        s.decide(true, None, at(10));
        assert_eq!(s.state(), SubmissionState::Approved);

        let mut r = Submission::new(MaterialValue::text("hello"), at(9));
        r.decide(false, Some("too vague".to_string()), at(10));
        assert_eq!(r.state(), SubmissionState::Rejected);
    }

    #[test]
    fn resubmission_supersedes_rejection() {
        let mut s = Submission::new(MaterialValue::text("v1"), at(9));
        s.decide(false, None, at(10));
        s.resubmit(MaterialValue::text("v2"), at(11));

        // Back to submitted: not missing, and not silently approved.
        assert_eq!(s.state(), SubmissionState::Submitted);
        assert!(s.previously_rejected());
    }

    #[test]
    fn resubmission_does_not_revive_approval() {
        let mut s = Submission::new(MaterialValue::text("v1"), at(9));
        s.decide(true, None, at(10));
        s.resubmit(MaterialValue::text("v2"), at(11));
        assert_eq!(s.state(), SubmissionState::Submitted);
    }
}
