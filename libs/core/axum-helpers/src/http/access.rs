use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::security::AccessPolicy;

use crate::errors::AppError;

/// Gate every request through the configured [`AccessPolicy`].
///
/// ```ignore
/// router.layer(axum::middleware::from_fn_with_state(policy, enforce_access_policy))
/// ```
pub async fn enforce_access_policy(
    State(policy): State<AccessPolicy>,
    request: Request,
    next: Next,
) -> Response {
    if policy.permits_anonymous() {
        return next.run(request).await;
    }

    tracing::warn!(
        policy = %policy,
        method = %request.method(),
        path = %request.uri().path(),
        "Request rejected by access policy"
    );
    AppError::Forbidden(format!("Access policy '{}' rejected the request", policy)).into_response()
}
