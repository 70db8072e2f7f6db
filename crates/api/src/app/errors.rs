use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use itemservice_core::DomainError;

use crate::app::views;
use crate::context::RequestContext;

pub fn domain_error_to_response(
    err: DomainError,
    ctx: &RequestContext,
) -> axum::response::Response {
    match err {
        DomainError::InvalidId(msg) => html_error(StatusCode::BAD_REQUEST, msg, ctx),
        DomainError::ItemNotFound(id) => {
            html_error(StatusCode::NOT_FOUND, format!("item {id} not found"), ctx)
        }
    }
}

pub fn html_error(
    status: StatusCode,
    message: impl Into<String>,
    ctx: &RequestContext,
) -> axum::response::Response {
    let message = message.into();
    tracing::warn!(status = status.as_u16(), %message, "request failed");
    (
        status,
        Html(views::error_page(status, &message, ctx.request_id())),
    )
        .into_response()
}
