/// Factory: build the verifier and the principal resolver from application `Config`.
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::warn;

use crate::config::{Config, ConfigError, PrincipalSource};
use crate::services::auth::access_jwt::{TokenVerifier, VerifierKey, VerifierPolicy};
use crate::services::auth::resolver::{
    InMemoryPrincipalResolver, PgPrincipalResolver, PrincipalResolver,
};

pub fn build_verifier(config: &Config) -> Result<TokenVerifier, ConfigError> {
    let (key, name) = match (&config.jwt_secret, &config.access_jwt_public_key_pem) {
        (Some(secret), _) => (VerifierKey::Secret(secret.clone()), "JWT_SECRET"),
        (None, Some(pem)) => (
            VerifierKey::Ed25519PublicPem(pem.clone()),
            "ACCESS_JWT_PUBLIC_KEY_PEM",
        ),
        (None, None) => return Err(ConfigError::Missing("JWT_SECRET")),
    };

    let policy = VerifierPolicy {
        issuer: config.auth_issuer.clone(),
        audience: config.auth_audience.clone(),
        leeway_seconds: config.access_token_leeway_seconds,
    };

    TokenVerifier::new(&key, &policy).map_err(|e| {
        warn!(error = %e, key = name, "failed to load token verification key");
        ConfigError::Invalid(name)
    })
}

pub async fn build_resolver(config: &Config) -> Result<Arc<dyn PrincipalResolver>, ConfigError> {
    match &config.principal_source {
        PrincipalSource::Postgres { database_url } => {
            // Connections are opened on first lookup; a bad URL still fails here.
            let db = PgPoolOptions::new()
                .max_connections(5)
                .connect_lazy(database_url)
                .map_err(|e| {
                    warn!(error = %e, "invalid DATABASE_URL");
                    ConfigError::Invalid("DATABASE_URL")
                })?;
            Ok(Arc::new(PgPrincipalResolver::new(db)))
        }
        PrincipalSource::File { path } => {
            let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
                warn!(error = %e, path = %path.display(), "failed to read principals file");
                ConfigError::Invalid("PRINCIPALS_FILE")
            })?;
            let resolver = InMemoryPrincipalResolver::from_json(&raw).map_err(|e| {
                warn!(error = %e, path = %path.display(), "failed to parse principals file");
                ConfigError::Invalid("PRINCIPALS_FILE")
            })?;
            tracing::info!(count = resolver.len(), "loaded principals from file");
            Ok(Arc::new(resolver))
        }
    }
}
