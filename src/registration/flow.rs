//! Submission state machine.
//!
//! ```text
//!            begin (valid)            delivered
//! Editing ─────────────────> Submitting ─────────> Succeeded
//!    ^                           │
//!    └───────── failed ──────────┘
//! ```
//!
//! A failed attempt has no state of its own: the flow returns to `Editing`
//! and the draft stays as the user left it. `Succeeded` is terminal.

use super::draft::RegistrationDraft;
use super::payload::RegistrationPayload;
use super::validation::{self, ValidationError};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

/// Why a submission attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("registration already submitted")]
    Completed,
}

#[derive(Debug, Default)]
pub struct SubmissionFlow {
    state: FlowState,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.state == FlowState::Succeeded
    }

    /// Validate `draft` and, if it passes, move to `Submitting` and return
    /// the payload to deliver. Repeated calls while a delivery is pending
    /// are rejected without side effects.
    pub fn begin(
        &mut self,
        draft: &RegistrationDraft,
        now: DateTime<Utc>,
    ) -> Result<RegistrationPayload, SubmitError> {
        match self.state {
            FlowState::Submitting => return Err(SubmitError::InFlight),
            FlowState::Succeeded => return Err(SubmitError::Completed),
            FlowState::Editing => {}
        }
        validation::validate(draft)?;
        self.state = FlowState::Submitting;
        Ok(RegistrationPayload::from_draft(draft, now))
    }

    /// The delivery went out. Returns `false` if no delivery was pending.
    pub fn delivered(&mut self) -> bool {
        if self.state != FlowState::Submitting {
            return false;
        }
        self.state = FlowState::Succeeded;
        true
    }

    /// The delivery could not be sent; go back to editing.
    pub fn failed(&mut self) -> bool {
        if self.state != FlowState::Submitting {
            return false;
        }
        self.state = FlowState::Editing;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_reaches_succeeded() {
        let mut flow = SubmissionFlow::new();
        assert_eq!(flow.state(), FlowState::Editing);

        let payload = flow.begin(&RegistrationDraft::sample(), Utc::now()).unwrap();
        assert_eq!(payload.college_name, "KLE BCA College");
        assert!(flow.is_submitting());
        assert!(!flow.is_success());

        assert!(flow.delivered());
        assert!(flow.is_success());
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_invalid_draft_stays_editing() {
        let mut flow = SubmissionFlow::new();
        let mut draft = RegistrationDraft::sample();
        draft.participants = "0".to_string();

        let err = flow.begin(&draft, Utc::now()).unwrap_err();
        assert_eq!(err, SubmitError::Invalid(ValidationError::TooFewParticipants));
        assert_eq!(err.to_string(), "Number of participants must be at least 1");
        assert_eq!(flow.state(), FlowState::Editing);
    }

    #[test]
    fn test_second_begin_while_submitting_rejected() {
        let mut flow = SubmissionFlow::new();
        let draft = RegistrationDraft::sample();
        flow.begin(&draft, Utc::now()).unwrap();
        assert_eq!(flow.begin(&draft, Utc::now()), Err(SubmitError::InFlight));
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_failure_returns_to_editing_and_allows_retry() {
        let mut flow = SubmissionFlow::new();
        let draft = RegistrationDraft::sample();
        flow.begin(&draft, Utc::now()).unwrap();

        assert!(flow.failed());
        assert_eq!(flow.state(), FlowState::Editing);
        assert!(flow.begin(&draft, Utc::now()).is_ok());
    }

    #[test]
    fn test_succeeded_is_terminal() {
        let mut flow = SubmissionFlow::new();
        let draft = RegistrationDraft::sample();
        flow.begin(&draft, Utc::now()).unwrap();
        flow.delivered();

        assert_eq!(flow.begin(&draft, Utc::now()), Err(SubmitError::Completed));
        assert!(!flow.failed());
        assert!(!flow.delivered());
        assert!(flow.is_success());
    }

    #[test]
    fn test_outcomes_ignored_when_not_submitting() {
        let mut flow = SubmissionFlow::new();
        assert!(!flow.delivered());
        assert!(!flow.failed());
        assert_eq!(flow.state(), FlowState::Editing);
    }
}
