use axum::response::{IntoResponse, Response};
use folio_models::{
    contact::{ContactMessageContent, ContactName, ContactSubmission},
    email_address::EmailAddress,
};
use serde::{Deserialize, Serialize};

use crate::errors::{InvalidEmailError, InvalidMessageError, InvalidNameError};

/// The raw contact form as posted by the browser.
///
/// Fields are optional here so that a missing field is reported as an invalid
/// field instead of an unparseable body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<ApiContactSubmission> for ContactSubmission {
    type Error = Response;

    fn try_from(value: ApiContactSubmission) -> Result<Self, Self::Error> {
        let name = value
            .name
            .and_then(|name| ContactName::try_new(name).ok())
            .ok_or_else(|| InvalidNameError.into_response())?;

        let email = value
            .email
            .and_then(|email| email.trim().parse::<EmailAddress>().ok())
            .ok_or_else(|| InvalidEmailError.into_response())?;

        let message = value
            .message
            .and_then(|message| ContactMessageContent::try_new(message).ok())
            .ok_or_else(|| InvalidMessageError.into_response())?;

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactResponse {
    pub ok: bool,
    pub message: &'static str,
}

impl ApiContactResponse {
    pub const SENT: Self = Self {
        ok: true,
        message: "Message sent successfully",
    };
}
