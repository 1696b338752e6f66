use crossterm::event::Event as CrosstermEvent;

/// Identifies one visit of the registration screen.
pub type FormId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The webhook request went out; the remote answer is never read.
    SubmissionDelivered {
        form_id: FormId,
    },
    /// The webhook request could not be sent.
    SubmissionFailed {
        form_id: FormId,
        error: String,
    },

    /// The post-submission delay elapsed.
    RedirectDue {
        url: String,
    },

    /// Tick for UI refresh
    Tick,
}
