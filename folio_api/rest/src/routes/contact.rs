use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use folio_models::contact::ContactSubmission;
use tracing::debug;

use crate::{
    errors::{internal_server_error, InvalidBodyError, RateLimitedError, SendFailedError},
    middlewares::client_ip::ClientIp,
    models::contact::{ApiContactResponse, ApiContactSubmission},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    Extension(ClientIp(client_ip)): Extension<ClientIp>,
    body: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            debug!(%client_ip, "rejecting contact message: {rejection}");
            return InvalidBodyError.into_response();
        }
    };

    let submission = match ContactSubmission::try_from(body) {
        Ok(submission) => submission,
        Err(response) => return response,
    };

    match service.send_message(client_ip, submission).await {
        Ok(()) => Json(ApiContactResponse::SENT).into_response(),
        Err(ContactSendMessageError::RateLimited) => RateLimitedError.into_response(),
        Err(ContactSendMessageError::Send) => SendFailedError.into_response(),
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
