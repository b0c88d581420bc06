use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{PrincipalResolver, ResolverError};
use crate::repos::user_repo;
use crate::services::auth::principal::{Principal, Role};

/// Principal lookup against the `users` table.
#[derive(Debug, Clone)]
pub struct PgPrincipalResolver {
    db: PgPool,
}

impl PgPrincipalResolver {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrincipalResolver for PgPrincipalResolver {
    async fn resolve(&self, subject_id: &str) -> Result<Option<Principal>, ResolverError> {
        let Some(row) = user_repo::find_principal(&self.db, subject_id).await? else {
            return Ok(None);
        };

        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| ResolverError::Record(e.to_string()))?;

        Ok(Some(Principal {
            id: row.id,
            role,
            name: row.name,
            email: row.email,
        }))
    }
}
