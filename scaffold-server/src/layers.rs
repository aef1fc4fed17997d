use crate::{capability::panic_message, config::SecurityConfig, fallback::api_error};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build CORS layer from the allowed origins. An empty list or a `*` entry
/// allows any origin.
fn build_cors_layer(allow_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if allow_origins.is_empty() || allow_origins.iter().any(|o| o.trim() == "*") {
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> = allow_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        cors.allow_origin(origins)
    }
}

/// A panicking handler answers `500 {"detail": ...}` instead of dropping the
/// connection.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    tracing::error!(panic = %message, "request handler panicked");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {message}")).into_response()
}

/// Wrap `router` in the middleware every scaffold service carries.
pub(crate) fn apply(router: Router, allow_origins: &[String], security: &SecurityConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                security.request_timeout,
            ))
            .layer(DefaultBodyLimit::max(security.max_body_size))
            .layer(build_cors_layer(allow_origins))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    fn router(allow_origins: &[String]) -> Router {
        let router = Router::new().route("/ok", get(|| async { "ok" })).route("/boom", get(boom));
        apply(router, allow_origins, &SecurityConfig::default())
    }

    #[tokio::test]
    async fn test_wildcard_origin_allows_any() {
        let response = router(&["http://a.test".into(), "*".into()])
            .oneshot(
                Request::builder().uri("/ok").header("origin", "http://b.test").body(Body::empty()).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_internal_error() {
        let response = router(&[])
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let detail: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(detail["detail"].as_str().unwrap().contains("handler exploded"));
    }
}
