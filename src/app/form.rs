//! Registration form state: one editable input per field, the selected
//! stream, keyboard focus, and the submission flow for this visit.

use crate::app::event::FormId;
use crate::app::input::TextInput;
use crate::registration::draft::{RegistrationDraft, Stream};
use crate::registration::flow::SubmissionFlow;
use crate::registration::validation::CONTACT_NUMBER_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CollegeName,
    CollegeAddress,
    FacultyInchargeName,
    ContactNumber,
    Email,
    Participants,
    Stream,
    Submit,
}

impl FormField {
    /// Focus order, top to bottom.
    pub const ALL: [FormField; 8] = [
        FormField::CollegeName,
        FormField::CollegeAddress,
        FormField::FacultyInchargeName,
        FormField::ContactNumber,
        FormField::Email,
        FormField::Participants,
        FormField::Stream,
        FormField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CollegeName => "Enter your College Name",
            FormField::CollegeAddress => "Address of the College",
            FormField::FacultyInchargeName => "Name of the Faculty Incharge",
            FormField::ContactNumber => "Faculty Incharge Phone Number",
            FormField::Email => "Faculty Incharge Email",
            FormField::Participants => "Number of Participants / Team Members",
            FormField::Stream => "Stream",
            FormField::Submit => "Next",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::CollegeName => "Enter your college name",
            FormField::CollegeAddress => "Enter your college address",
            FormField::FacultyInchargeName => "Enter faculty incharge name",
            FormField::ContactNumber => "Enter 10-digit mobile number",
            FormField::Email => "Enter email address",
            FormField::Participants => "Enter number of participants",
            FormField::Stream | FormField::Submit => "",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, FormField::Email | FormField::Submit)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[if idx == 0 { Self::ALL.len() - 1 } else { idx - 1 }]
    }
}

#[derive(Debug)]
pub struct RegistrationForm {
    pub id: FormId,
    pub college_name: TextInput,
    pub college_address: TextInput,
    pub faculty_incharge_name: TextInput,
    pub contact_number: TextInput,
    pub email: TextInput,
    pub participants: TextInput,
    pub stream: Stream,
    pub focus: FormField,
    pub flow: SubmissionFlow,
}

impl RegistrationForm {
    pub fn new(id: FormId) -> Self {
        Self {
            id,
            college_name: TextInput::new(),
            college_address: TextInput::multiline(),
            faculty_incharge_name: TextInput::new(),
            contact_number: TextInput::with_max_len(CONTACT_NUMBER_LEN),
            email: TextInput::new(),
            participants: TextInput::new(),
            stream: Stream::default(),
            focus: FormField::CollegeName,
            flow: SubmissionFlow::new(),
        }
    }

    pub fn input(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::CollegeName => Some(&self.college_name),
            FormField::CollegeAddress => Some(&self.college_address),
            FormField::FacultyInchargeName => Some(&self.faculty_incharge_name),
            FormField::ContactNumber => Some(&self.contact_number),
            FormField::Email => Some(&self.email),
            FormField::Participants => Some(&self.participants),
            FormField::Stream | FormField::Submit => None,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::CollegeName => Some(&mut self.college_name),
            FormField::CollegeAddress => Some(&mut self.college_address),
            FormField::FacultyInchargeName => Some(&mut self.faculty_incharge_name),
            FormField::ContactNumber => Some(&mut self.contact_number),
            FormField::Email => Some(&mut self.email),
            FormField::Participants => Some(&mut self.participants),
            FormField::Stream | FormField::Submit => None,
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        self.input_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Snapshot of the current values.
    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            college_name: self.college_name.text.clone(),
            college_address: self.college_address.text.clone(),
            faculty_incharge_name: self.faculty_incharge_name.text.clone(),
            contact_number: self.contact_number.text.clone(),
            email: self.email.text.clone(),
            participants: self.participants.text.clone(),
            stream: self.stream,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.flow.is_submitting()
    }

    pub fn is_success(&self) -> bool {
        self.flow.is_success()
    }
}

#[cfg(test)]
impl RegistrationForm {
    /// A form whose values match [`RegistrationDraft::sample`].
    pub fn filled(id: FormId) -> Self {
        let sample = RegistrationDraft::sample();
        let mut form = Self::new(id);
        for (field, value) in [
            (FormField::CollegeName, &sample.college_name),
            (FormField::CollegeAddress, &sample.college_address),
            (FormField::FacultyInchargeName, &sample.faculty_incharge_name),
            (FormField::ContactNumber, &sample.contact_number),
            (FormField::Email, &sample.email),
            (FormField::Participants, &sample.participants),
        ] {
            if let Some(input) = form.input_mut(field) {
                for c in value.chars() {
                    input.insert_char(c);
                }
            }
        }
        form.stream = sample.stream;
        form
    }
}
