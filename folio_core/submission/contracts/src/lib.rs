use std::future::Future;

use thiserror::Error;

pub trait SubmissionFeatureService: Send + Sync + 'static {
    /// Send the contents of the contact form to the relay.
    ///
    /// On success the form is cleared, on failure it is left untouched so
    /// the user can try again. Nothing is retried automatically.
    fn submit(
        &self,
        form: &mut ContactForm,
    ) -> impl Future<Output = Result<Acknowledgment, SubmissionSubmitError>> + Send;
}

/// The fields of the contact form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Returns the first required field that is empty.
    pub fn missing_field(&self) -> Option<ContactFormField> {
        [
            (ContactFormField::Name, &self.name),
            (ContactFormField::Email, &self.email),
            (ContactFormField::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormField {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for ContactFormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

/// The feedback shown to the user after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Sent,
    Failed,
}

impl Acknowledgment {
    pub fn message(self) -> &'static str {
        match self {
            Self::Sent => "Message sent successfully",
            Self::Failed => "Error sending the message",
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionSubmitError {
    #[error("Please fill in the {0} field.")]
    MissingField(ContactFormField),
}
