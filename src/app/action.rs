use crate::app::event::FormId;
use crate::registration::payload::RegistrationPayload;
use std::time::Duration;

#[derive(Debug)]
pub enum Action {
    Submit { form_id: FormId, payload: RegistrationPayload },
    ScheduleRedirect { url: String, delay: Duration },
    Redirect { url: String },
    Quit,
}
