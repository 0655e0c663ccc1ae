use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use jobhub_core::AppError;

use crate::error::ApiError;

/// Header the gateway sets to the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, inserted into request extensions by [`require_user`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub Uuid);

/// Middleware that requires a valid `X-User-Id` UUID header.
pub async fn require_user(mut request: Request<axum::body::Body>, next: Next) -> Response {
    let caller = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok());

    let Some(user_id) = caller else {
        return ApiError(AppError::Unauthorized(
            "Missing or invalid X-User-Id header. Expected a UUID.".to_string(),
        ))
        .into_response();
    };

    request.extensions_mut().insert(CallerId(user_id));
    next.run(request).await
}
