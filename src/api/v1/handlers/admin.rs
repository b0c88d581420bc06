/*
 * Responsibility
 * - ロールで保護されたルートの handler
 * - ロール判定自体は RoleGate (middleware) が済ませている前提
 */
use axum::Json;
use serde_json::{Value, json};

use crate::api::v1::extractors::CurrentPrincipal;

// admin only
pub async fn overview(CurrentPrincipal(principal): CurrentPrincipal) -> Json<Value> {
    Json(json!({ "success": true, "data": { "role": principal.role } }))
}

// admin or editor
pub async fn review_queue(CurrentPrincipal(principal): CurrentPrincipal) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": { "reviewer": principal.id, "items": [] }
    }))
}
