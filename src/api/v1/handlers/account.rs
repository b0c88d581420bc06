/*
 * Responsibility
 * - GET /me        : 必須認証。解決済み Principal をそのまま返す
 * - GET /greeting  : 任意認証。匿名でも 200、認証済みなら名前で挨拶する
 */
use axum::Json;
use serde_json::{Value, json};

use crate::api::v1::extractors::{CurrentPrincipal, MaybePrincipal};

pub async fn me(CurrentPrincipal(principal): CurrentPrincipal) -> Json<Value> {
    Json(json!({ "success": true, "data": principal }))
}

pub async fn greeting(MaybePrincipal(principal): MaybePrincipal) -> Json<Value> {
    let (message, authenticated) = match principal {
        Some(p) => {
            let who = p.name.as_deref().unwrap_or(p.id.as_str());
            (format!("Welcome back, {who}"), true)
        }
        None => ("Welcome, guest".to_string(), false),
    };

    Json(json!({
        "success": true,
        "data": { "message": message, "authenticated": authenticated }
    }))
}
