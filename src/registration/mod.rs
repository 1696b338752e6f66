//! Registration domain: the draft, its validation rules, the JSON payload sent
//! to the webhook, and the submission state machine.

pub mod draft;
pub mod flow;
pub mod payload;
pub mod validation;
