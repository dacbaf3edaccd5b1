//! Feedback submission: the status state machine and the single POST to the
//! form intake endpoint.

use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config;

/// Lifecycle of one mounted feedback form. Exactly one value is live at a
/// time; transitions happen only through [`begin`](Self::begin),
/// [`finish`](Self::finish) and [`reset`](Self::reset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Starts a submission. Allowed from Idle and Error (manual resubmit);
    /// refused while a request is in flight or after a success, so a
    /// re-entrant submit event cannot fire a second request.
    pub fn begin(self) -> Option<Self> {
        match self {
            Self::Idle | Self::Error => Some(Self::Submitting),
            Self::Submitting | Self::Success => None,
        }
    }

    /// Applies the outcome of the in-flight request. Only meaningful from
    /// Submitting; a stale completion leaves any other state untouched.
    pub fn finish(self, accepted: bool) -> Self {
        match self {
            Self::Submitting if accepted => Self::Success,
            Self::Submitting => Self::Error,
            other => other,
        }
    }

    /// "Send another message": returns to Idle from Success.
    pub fn reset(self) -> Self {
        match self {
            Self::Success => Self::Idle,
            other => other,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Suggestion,
    Bug,
    Feature,
    Other,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suggestion => "suggestion",
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Other => "other",
        }
    }

    /// Parses the value of the form's `<select>`. Unknown values fall back
    /// to Other.
    pub fn parse(value: &str) -> Self {
        match value {
            "suggestion" => Self::Suggestion,
            "bug" => Self::Bug,
            "feature" => Self::Feature,
            _ => Self::Other,
        }
    }
}

/// Ephemeral value built from the form fields at submit time, sent once and
/// discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub kind: FeedbackKind,
    pub message: String,
}

impl FeedbackSubmission {
    fn to_form_data(&self) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        form.append_with_str("name", &self.name)?;
        form.append_with_str("email", &self.email)?;
        form.append_with_str("type", self.kind.as_str())?;
        form.append_with_str("message", &self.message)?;
        Ok(form)
    }
}

/// Whether an HTTP status counts as the endpoint accepting the submission.
pub fn accepted(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Posts the submission to the intake endpoint as multipart form data. One
/// attempt, no retries; a transport error counts as a rejection just like a
/// non-2xx status.
pub async fn post_feedback(submission: &FeedbackSubmission) -> bool {
    let form = match submission.to_form_data() {
        Ok(form) => form,
        Err(err) => {
            log!("Failed to build feedback form data:", format!("{:?}", err));
            return false;
        }
    };

    let request = match Request::post(config::get_form_endpoint())
        .header("Accept", "application/json")
        .body(form)
    {
        Ok(request) => request,
        Err(err) => {
            log!("Failed to build feedback request:", err.to_string());
            return false;
        }
    };

    match request.send().await {
        Ok(response) => accepted(response.status()),
        Err(err) => {
            log!("Feedback request failed:", err.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_moves_idle_to_submitting() {
        assert_eq!(
            SubmissionStatus::Idle.begin(),
            Some(SubmissionStatus::Submitting)
        );
    }

    #[test]
    fn resubmit_allowed_from_error() {
        assert_eq!(
            SubmissionStatus::Error.begin(),
            Some(SubmissionStatus::Submitting)
        );
    }

    #[test]
    fn begin_refused_while_in_flight_or_after_success() {
        assert_eq!(SubmissionStatus::Submitting.begin(), None);
        assert_eq!(SubmissionStatus::Success.begin(), None);
    }

    #[test]
    fn accepted_response_reaches_success() {
        let status = SubmissionStatus::Idle.begin().unwrap();
        assert_eq!(status.finish(true), SubmissionStatus::Success);
    }

    #[test]
    fn rejected_response_reaches_error() {
        let status = SubmissionStatus::Idle.begin().unwrap();
        assert_eq!(status.finish(false), SubmissionStatus::Error);
    }

    #[test]
    fn stale_completion_leaves_settled_states_alone() {
        assert_eq!(
            SubmissionStatus::Success.finish(false),
            SubmissionStatus::Success
        );
        assert_eq!(SubmissionStatus::Idle.finish(true), SubmissionStatus::Idle);
    }

    #[test]
    fn send_another_returns_to_idle_only_from_success() {
        assert_eq!(SubmissionStatus::Success.reset(), SubmissionStatus::Idle);
        assert_eq!(
            SubmissionStatus::Submitting.reset(),
            SubmissionStatus::Submitting
        );
        assert_eq!(SubmissionStatus::Error.reset(), SubmissionStatus::Error);
    }

    #[test]
    fn bug_report_lifecycle() {
        let submission = FeedbackSubmission {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            kind: FeedbackKind::Bug,
            message: "Export fails on Firefox".to_string(),
        };
        assert_eq!(submission.kind.as_str(), "bug");

        // Endpoint answers 200: the form settles on Success.
        let status = SubmissionStatus::Idle.begin().unwrap();
        assert_eq!(status.finish(accepted(200)), SubmissionStatus::Success);

        // Endpoint answers 500: the same submission settles on Error and a
        // manual resubmit is allowed.
        let status = SubmissionStatus::Idle.begin().unwrap();
        let status = status.finish(accepted(500));
        assert_eq!(status, SubmissionStatus::Error);
        assert_eq!(status.begin(), Some(SubmissionStatus::Submitting));
    }

    #[test]
    fn only_2xx_statuses_count_as_accepted() {
        assert!(accepted(200));
        assert!(accepted(204));
        assert!(!accepted(302));
        assert!(!accepted(422));
        assert!(!accepted(500));
    }

    #[test]
    fn kind_parses_select_values() {
        assert_eq!(FeedbackKind::parse("suggestion"), FeedbackKind::Suggestion);
        assert_eq!(FeedbackKind::parse("bug"), FeedbackKind::Bug);
        assert_eq!(FeedbackKind::parse("feature"), FeedbackKind::Feature);
        assert_eq!(FeedbackKind::parse("other"), FeedbackKind::Other);
        assert_eq!(FeedbackKind::parse("garbage"), FeedbackKind::Other);
    }
}
