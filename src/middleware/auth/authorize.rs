//! Role gate. Reads the `AuthCtx` left by the authentication gate; it never
//! looks at tokens itself, so without a preceding authentication stage every
//! request is rejected as unauthenticated.

use std::{collections::BTreeSet, sync::Arc};

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use tracing::warn;

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::Role;

/// Allowed-role predicate, built once per protected resource and shared across requests.
#[derive(Debug, Clone)]
pub struct RoleGate {
    allowed: Arc<BTreeSet<Role>>,
}

impl RoleGate {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: Arc::new(roles.into_iter().collect()),
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    pub fn check(&self, auth_ctx: Option<&AuthCtx>) -> Result<(), AppError> {
        let principal = auth_ctx
            .and_then(AuthCtx::principal)
            .ok_or_else(AppError::unauthorized)?;

        if !self.allows(principal.role) {
            warn!(
                subject = %principal.id,
                role = %principal.role,
                allowed = ?self.allowed,
                "role not permitted"
            );
            return Err(AppError::forbidden(format!(
                "User role {} is not authorized to access this route",
                principal.role
            )));
        }

        Ok(())
    }
}

/// Applies `gate` to every route currently registered on `router`.
///
/// Wrap the result with `authenticate::require` so authentication runs first.
pub fn apply<S>(router: Router<S>, gate: RoleGate) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(gate, authorize_middleware))
}

async fn authorize_middleware(
    State(gate): State<RoleGate>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    gate.check(req.extensions().get::<AuthCtx>())?;
    Ok(next.run(req).await)
}
