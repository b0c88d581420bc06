//! Shared fixtures for unit tests: a fixed secret, a seeded principal store and a token minter.
use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::services::auth::access_jwt::{TokenVerifier, VerifierKey, VerifierPolicy};
use crate::services::auth::resolver::store::ResolverError;
use crate::services::auth::resolver::{InMemoryPrincipalResolver, PrincipalResolver};
use crate::services::auth::{Principal, Role};
use crate::state::AppState;

pub const SECRET: &str = "test-secret-do-not-use";

pub const ADMIN_ID: &str = "64f000000000000000000001";
pub const EDITOR_ID: &str = "64f000000000000000000002";
pub const USER_ID: &str = "64f000000000000000000003";
pub const DELETED_ID: &str = "64f0000000000000000000ff";

pub fn principals() -> Vec<Principal> {
    vec![
        Principal::new(ADMIN_ID, Role::Admin).with_name("Ada"),
        Principal::new(EDITOR_ID, Role::Editor).with_email("ed@example.com"),
        Principal::new(USER_ID, Role::User),
    ]
}

pub fn verifier(secret: &str) -> Arc<TokenVerifier> {
    Arc::new(
        TokenVerifier::new(
            &VerifierKey::Secret(secret.to_string()),
            &VerifierPolicy::default(),
        )
        .unwrap(),
    )
}

pub fn state() -> AppState {
    AppState::new(
        verifier(SECRET),
        Arc::new(InMemoryPrincipalResolver::new(principals())),
    )
}

pub fn state_with_resolver(resolver: Arc<dyn PrincipalResolver>) -> AppState {
    AppState::new(verifier(SECRET), resolver)
}

/// Signs `{ sub, iat, exp: now + ttl }` with `secret`.
pub fn token_with(secret: &str, sub: &str, ttl_seconds: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &json!({ "sub": sub, "iat": now, "exp": now + ttl_seconds }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn token(sub: &str) -> String {
    token_with(SECRET, sub, 600)
}

/// A resolver whose backend is always down.
pub struct FailingResolver;

#[async_trait::async_trait]
impl PrincipalResolver for FailingResolver {
    async fn resolve(&self, _subject_id: &str) -> Result<Option<Principal>, ResolverError> {
        Err(ResolverError::Record("backend unavailable".to_string()))
    }
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
