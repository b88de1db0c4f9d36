use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error_code;

pub trait ApiErrorCode {
    const CODE: &'static str;
    const MESSAGE: &'static str;
    const STATUS_CODE: StatusCode;
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub ok: bool,
    pub message: &'static str,
    pub error: &'static str,
}

pub fn error_response<E: ApiErrorCode>() -> Response {
    let body = ApiError {
        ok: false,
        message: E::MESSAGE,
        error: E::CODE,
    };
    (E::STATUS_CODE, Json(body)).into_response()
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    InternalServerError.into_response()
}

error_code! {
    pub InternalServerError(INTERNAL_SERVER_ERROR, "internal_error", "Internal server error");

    // Contact
    /// The request body is not a json object with the expected fields.
    pub InvalidBodyError(BAD_REQUEST, "invalid_body", "Invalid request body");
    /// The name is missing, empty or too long.
    pub InvalidNameError(BAD_REQUEST, "invalid_name", "Please provide a valid name");
    /// The email address is missing or malformed.
    pub InvalidEmailError(BAD_REQUEST, "invalid_email", "Please provide a valid email address");
    /// The message is missing, empty or too long.
    pub InvalidMessageError(BAD_REQUEST, "invalid_message", "Please provide a valid message");
    pub RateLimitedError(TOO_MANY_REQUESTS, "rate_limited", "Too many messages, please try again later");
    pub SendFailedError(INTERNAL_SERVER_ERROR, "send_failed", "Error sending the message");
}
