/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - verifier: 起動時に一度だけ読み込んだ鍵で検証する TokenVerifier
 *   - resolver: subject → Principal を引く外部ストア
 * - Clone 前提で持つ (内部は Arc/Clone cheap)。リクエスト間で可変状態は持たない
 */
use std::{fmt, sync::Arc};

use crate::services::auth::{PrincipalResolver, TokenVerifier};

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    pub resolver: Arc<dyn PrincipalResolver>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("verifier", &self.verifier)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(verifier: Arc<TokenVerifier>, resolver: Arc<dyn PrincipalResolver>) -> Self {
        Self { verifier, resolver }
    }
}
