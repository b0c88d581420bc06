/*
 * Responsibility
 * - users テーブルから Principal に必要な列だけを読む
 * - password 等の資格情報列は SELECT しない
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct PrincipalRow {
    pub id: String,
    pub role: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

pub async fn find_principal(db: &PgPool, id: &str) -> Result<Option<PrincipalRow>, RepoError> {
    // id は uuid / text どちらの列型でも比較できるよう text に寄せる
    let row = sqlx::query_as::<_, PrincipalRow>(
        r#"
        SELECT id::text AS id, role, name, email
        FROM users
        WHERE id::text = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
