pub mod ai;
pub mod state;

use crate::opts::HttpOpts;

use std::time::Duration;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{self, FromRequestParts},
    http::{HeaderValue, Method, Request, StatusCode, header},
    middleware::{self, Next},
    routing::get,
};
use axum_client_ip::ClientIp;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub fn build_app(opts: &HttpOpts, state: state::AppState) -> anyhow::Result<Router> {
    let service_info = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    });

    Ok(Router::new()
        .route("/infoz", get(move || async move { Json(service_info) }))
        .route("/healthz", get(|| async { StatusCode::OK }))
        .merge(ai::routes())
        .layer(cors_layer(opts)?)
        .layer(
            tower::ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(opts.client_ip_source.clone().into_extension())
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default();
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                            ip = tracing::field::Empty
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::from_fn(
                    async |request: extract::Request, next: Next| {
                        let (mut parts, body) = request.into_parts();
                        if let Ok(ip) = ClientIp::from_request_parts(&mut parts, &()).await {
                            let span = tracing::Span::current();
                            span.record("ip", ip.0.to_string());
                        } else {
                            tracing::debug!("client ip unavailable");
                        }
                        next.run(extract::Request::from_parts(parts, body)).await
                    },
                )),
        )
        .with_state(state))
}

fn cors_layer(opts: &HttpOpts) -> anyhow::Result<CorsLayer> {
    let allow_origin = if opts.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins = opts
            .origins
            .iter()
            .map(|v| {
                v.parse::<HeaderValue>()
                    .with_context(|| format!("invalid CORS origin {v:?}"))
            })
            .collect::<anyhow::Result<Vec<HeaderValue>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600)))
}
