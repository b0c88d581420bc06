/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証ゲートが request extensions に載せたコンテキスト（AuthCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthCtx
 * - CurrentPrincipal / MaybePrincipal
 */

mod core;
mod types;

pub use core::{CurrentPrincipal, MaybePrincipal};
pub use types::AuthCtx;
