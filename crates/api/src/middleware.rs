use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;

use crate::context::{RequestContext, REQUEST_ID_HEADER};

/// Attach a `RequestContext`, run the request inside a span carrying its id,
/// and echo the id back in `x-request-id`.
pub async fn request_trace(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::from_header(
        req.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );
    req.extensions_mut().insert(ctx);

    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
    });

    response
}
