use std::collections::HashMap;

use async_trait::async_trait;

use super::store::{PrincipalResolver, ResolverError};
use crate::services::auth::principal::Principal;

/// Principal lookup backed by a fixed map (tests, local runs with `PRINCIPALS_FILE`).
#[derive(Debug, Clone, Default)]
pub struct InMemoryPrincipalResolver {
    principals: HashMap<String, Principal>,
}

impl InMemoryPrincipalResolver {
    pub fn new(principals: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            principals: principals.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// Parses a JSON array of principal records. Unknown fields (e.g. `password`) are dropped.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let principals: Vec<Principal> = serde_json::from_str(raw)?;
        Ok(Self::new(principals))
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }
}

#[async_trait]
impl PrincipalResolver for InMemoryPrincipalResolver {
    async fn resolve(&self, subject_id: &str) -> Result<Option<Principal>, ResolverError> {
        Ok(self.principals.get(subject_id).cloned())
    }
}
