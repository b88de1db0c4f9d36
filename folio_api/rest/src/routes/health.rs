use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { email } = service.get_status().await;

    let status = if email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(HealthResponse { http: true, email })).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Method};
    use folio_core_contact_contracts::MockContactFeatureService;
    use folio_core_health_contracts::MockHealthFeatureService;
    use folio_demo::CLIENT_IP_1;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::tests::{config, json_body, request, sut};

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let health = MockHealthFeatureService::new().with_get_status(HealthStatus { email: true });
        let sut = sut(health, MockContactFeatureService::new(), config());

        // Act
        let response = sut
            .oneshot(request(Method::GET, "/health", CLIENT_IP_1, Body::empty()))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"http": true, "email": true}));
    }

    #[tokio::test]
    async fn smtp_unreachable() {
        // Arrange
        let health =
            MockHealthFeatureService::new().with_get_status(HealthStatus { email: false });
        let sut = sut(health, MockContactFeatureService::new(), config());

        // Act
        let response = sut
            .oneshot(request(Method::GET, "/health", CLIENT_IP_1, Body::empty()))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"http": true, "email": false})
        );
    }
}
