//! Token → verify → principal lookup, then `AuthCtx` into request extensions.
//!
//! Two modes share the same pipeline:
//! - `require`: any failure rejects the request with 401 and the handler never runs.
//! - `optional`: any failure becomes an anonymous `AuthCtx`; the request always proceeds.
//!
//! Verification failures are reported to the caller with one uniform message;
//! the reason only goes to the log.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
};
use tracing::{debug, warn};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{Principal, extract_token};
use crate::state::AppState;

/// Mandatory authentication for every route currently registered on `router`.
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::authenticate::require(protected, state.clone());
/// ```
pub fn require(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, require_middleware))
}

/// Optional authentication: attaches a principal when one can be resolved, never rejects.
pub fn optional(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, optional_middleware))
}

/// Runs extraction, verification and resolution.
///
/// Every failure is already mapped to `AppError::Unauthorized`.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Principal, AppError> {
    let Some(token) = extract_token(headers) else {
        debug!("no credential token supplied");
        return Err(AppError::unauthorized());
    };

    let claims = match state.verifier.verify(token.as_str()) {
        Ok(claims) => claims,
        Err(err) => {
            warn!(
                error = ?err,
                reason = %err.kind(),
                source = ?token.source(),
                "access token verification failed"
            );
            return Err(AppError::unauthorized());
        }
    };

    match state.resolver.resolve(&claims.sub).await {
        Ok(Some(principal)) => {
            debug!(
                subject = %principal.id,
                role = %principal.role,
                source = ?token.source(),
                issued_at = ?claims.issued_at(),
                expires_at = ?claims.expires_at(),
                custom_claims = ?claims.custom.keys().collect::<Vec<_>>(),
                "principal authenticated"
            );
            Ok(principal)
        }
        Ok(None) => {
            warn!(subject = %claims.sub, "principal not found for verified token");
            Err(AppError::principal_not_found())
        }
        Err(err) => {
            warn!(error = ?err, subject = %claims.sub, "principal lookup failed");
            Err(AppError::unauthorized())
        }
    }
}

async fn require_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let principal = authenticate(&state, req.headers()).await?;

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::authenticated(principal));

    Ok(next.run(req).await)
}

async fn optional_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let auth_ctx = match authenticate(&state, req.headers()).await {
        Ok(principal) => AuthCtx::authenticated(principal),
        Err(_) => AuthCtx::anonymous(),
    };

    req.extensions_mut().insert(auth_ctx);

    next.run(req).await
}
