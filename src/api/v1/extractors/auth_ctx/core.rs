use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::Principal;

use super::AuthCtx;

/// Handler で、認証済み Principal を受け取るための extractor
/// middleware が AuthCtx を request.extensions() に insert 済みである前提
/// Principal がない場合は 401 を返す（認証がかかってない・任意認証で匿名）
pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .and_then(AuthCtx::principal)
            .cloned()
            .map(CurrentPrincipal)
            .ok_or_else(AppError::unauthorized)
    }
}

/// 任意認証のルート向け。匿名なら None
pub struct MaybePrincipal(pub Option<Principal>);

impl<S> FromRequestParts<S> for MaybePrincipal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybePrincipal(
            parts
                .extensions
                .get::<AuthCtx>()
                .and_then(AuthCtx::principal)
                .cloned(),
        ))
    }
}
