use serde::Serialize;
use std::fmt;

/// Academic stream a team registers under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Stream {
    #[default]
    Commerce,
    Science,
}

impl Stream {
    pub const ALL: [Stream; 2] = [Stream::Commerce, Stream::Science];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Commerce => "Commerce",
            Stream::Science => "Science",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Stream::Commerce => Stream::Science,
            Stream::Science => Stream::Commerce,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the registration form values at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationDraft {
    pub college_name: String,
    pub college_address: String,
    pub faculty_incharge_name: String,
    pub contact_number: String,
    pub email: String,
    pub participants: String,
    pub stream: Stream,
}

#[cfg(test)]
impl RegistrationDraft {
    /// A draft that passes every validation rule.
    pub fn sample() -> Self {
        Self {
            college_name: "KLE BCA College".to_string(),
            college_address: "Vidyanagar, Hubballi".to_string(),
            faculty_incharge_name: "Dr. Patil".to_string(),
            contact_number: "9876543210".to_string(),
            email: String::new(),
            participants: "4".to_string(),
            stream: Stream::Science,
        }
    }
}
