/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - どのルートにどの認証モード / 認可ゲートを掛けるかはここで決める
 *   - /health            : なし
 *   - /greeting          : 任意認証
 *   - /me                : 必須認証
 *   - /admin/overview    : 必須認証 + admin
 *   - /articles/review   : 必須認証 + admin | editor
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{account, admin, health::health};
use crate::middleware::auth::{RoleGate, authenticate, authorize};
use crate::services::auth::Role;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public: Router<AppState> = Router::new().route("/health", get(health));

    let personalized = authenticate::optional(
        Router::new().route("/greeting", get(account::greeting)),
        state.clone(),
    );

    let admin_only: Router<AppState> = authorize::apply(
        Router::new().route("/admin/overview", get(admin::overview)),
        RoleGate::new([Role::Admin]),
    );

    let reviewers: Router<AppState> = authorize::apply(
        Router::new().route("/articles/review", get(admin::review_queue)),
        RoleGate::new([Role::Admin, Role::Editor]),
    );

    // role gates are registered first so authentication wraps them
    let protected = authenticate::require(
        Router::new()
            .route("/me", get(account::me))
            .merge(admin_only)
            .merge(reviewers),
        state,
    );

    public.merge(personalized).merge(protected)
}
