//! Application router - all routes plus the cross-cutting tower layers.

use axum::body::Body;
use axum::Router;
use http::{HeaderValue, Method, Request};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::predict::{predict_routes, PredictAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the complete application router.
///
/// Layer order, outermost first: request id, tracing, id propagation,
/// compression, CORS, timeout.
pub fn app_router(state: PredictAppState, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id,
            )
        }))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()));

    predict_routes(state).layer(middleware)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        base.allow_origin(AllowOrigin::list(origins))
    } else if config.is_production() {
        base
    } else {
        base.allow_origin(Any)
    }
}
