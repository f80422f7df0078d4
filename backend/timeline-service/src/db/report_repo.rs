use crate::models::Report;
use sqlx::PgPool;
use uuid::Uuid;

/// Record a viewer's report against a post.
pub async fn insert(
    pool: &PgPool,
    reporter_id: Uuid,
    post_id: Uuid,
    reason: &str,
) -> Result<Report, sqlx::Error> {
    sqlx::query_as::<_, Report>(
        r#"
        INSERT INTO reports (reporter_id, post_id, reason)
        VALUES ($1, $2, $3)
        RETURNING id, reporter_id, post_id, reason, created_at
        "#,
    )
    .bind(reporter_id)
    .bind(post_id)
    .bind(reason)
    .fetch_one(pool)
    .await
}

/// Whether the reporter has already reported this post.
pub async fn exists(pool: &PgPool, reporter_id: Uuid, post_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM reports
            WHERE reporter_id = $1 AND post_id = $2
        )
        "#,
    )
    .bind(reporter_id)
    .bind(post_id)
    .fetch_one(pool)
    .await
}

/// All post ids a viewer has reported, for feed suppression.
pub async fn reported_post_ids(pool: &PgPool, reporter_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT post_id
        FROM reports
        WHERE reporter_id = $1
        "#,
    )
    .bind(reporter_id)
    .fetch_all(pool)
    .await
}
