use super::draft::{RegistrationDraft, Stream};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Placeholder sent in place of a blank email address.
pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// JSON body posted to the registration webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub college_name: String,
    pub college_address: String,
    pub faculty_incharge_name: String,
    pub contact_number: String,
    pub email: String,
    pub participants: String,
    pub stream: Stream,
    pub timestamp: String,
}

impl RegistrationPayload {
    pub fn from_draft(draft: &RegistrationDraft, submitted_at: DateTime<Utc>) -> Self {
        let email = if draft.email.is_empty() {
            EMAIL_NOT_PROVIDED.to_string()
        } else {
            draft.email.clone()
        };
        Self {
            college_name: draft.college_name.clone(),
            college_address: draft.college_address.clone(),
            faculty_incharge_name: draft.faculty_incharge_name.clone(),
            contact_number: draft.contact_number.clone(),
            email,
            participants: draft.participants.clone(),
            stream: draft.stream,
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
