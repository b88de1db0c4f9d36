use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::error;

/// Allow cross-origin requests from `allowed_origins`, or from anywhere if
/// the list is empty.
pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    allowed_origins: &[String],
) -> Router<S> {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(allowed_origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|err| error!(%origin, "ignoring invalid cors origin: {err}"))
                .ok()
        }))
    };

    router.layer(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .expose_headers([header::HeaderName::from_static("x-request-id")]),
    )
}
