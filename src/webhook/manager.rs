//! Background submission runner.
//!
//! Each accepted submission is delivered on its own tokio task; the outcome
//! comes back to the event loop as an [`AppEvent`] tagged with the form that
//! issued it.

use crate::app::event::{AppEvent, FormId};
use crate::registration::payload::RegistrationPayload;
use crate::webhook::delivery::BestEffortDelivery;
use tokio::sync::mpsc;

pub struct WebhookManager {
    delivery: BestEffortDelivery,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl WebhookManager {
    pub fn new(delivery: BestEffortDelivery, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { delivery, event_tx }
    }

    /// Spawn a single delivery attempt for `payload`.
    pub fn submit(&self, form_id: FormId, payload: RegistrationPayload) {
        let delivery = self.delivery.clone();
        let event_tx = self.event_tx.clone();
        tracing::info!(form_id, college = %payload.college_name, url = delivery.url(), "Submitting registration");

        tokio::spawn(async move {
            let event = match delivery.deliver(&payload).await {
                Ok(()) => {
                    tracing::info!(form_id, "Registration delivered");
                    AppEvent::SubmissionDelivered { form_id }
                }
                Err(e) => {
                    tracing::error!(form_id, error = %e, "Submission error");
                    AppEvent::SubmissionFailed {
                        form_id,
                        error: e.to_string(),
                    }
                }
            };
            let _ = event_tx.send(event);
        });
    }
}
