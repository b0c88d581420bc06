use async_trait::async_trait;

use crate::repos::error::RepoError;
use crate::services::auth::principal::Principal;

/// Maps a verified subject identifier to a principal.
///
/// - `Ok(Some(_))`: principal found (credential fields already stripped)
/// - `Ok(None)`: no such principal
/// - `Err(_)`: store failure (the gate treats it as an authentication failure)
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    async fn resolve(&self, subject_id: &str) -> Result<Option<Principal>, ResolverError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error("invalid principal record: {0}")]
    Record(String),
}
