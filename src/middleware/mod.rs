/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: 認証ゲート (必須 / 任意) と認可ゲート (ロール)
 * - http: request id / trace / body limit / timeout
 */
pub mod auth;
pub mod http;
