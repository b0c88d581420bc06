/*
 * Responsibility
 * - Handler から見える「認証コンテキスト」の型
 * - 認証ゲートが一度だけ書き込む。中身は解決済み Principal か、明示的な「なし」のどちらか
 *
 * Notes
 * - トークン抽出・検証・Principal 解決は middleware/services 側の責務
 */

use crate::services::auth::Principal;

/// Request-scoped authentication result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    principal: Option<Principal>,
}

impl AuthCtx {
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
        }
    }

    pub fn anonymous() -> Self {
        Self { principal: None }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }
}
