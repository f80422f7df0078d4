use crate::models::Follow;
use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// One follower/following listing row: the user on the other end of the
/// edge, plus when the edge was created
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FollowListRow {
    pub user_id: Uuid,
    pub username: String,
    pub profile_image_url: Option<String>,
    pub followed_at: DateTime<Utc>,
}

impl PageItem for FollowListRow {
    fn page_timestamp(&self) -> DateTime<Utc> {
        self.followed_at
    }
}

/// Idempotent create follow; returns the new edge, or None if it existed.
pub async fn insert(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<Option<Follow>, sqlx::Error> {
    sqlx::query_as::<_, Follow>(
        r#"
        INSERT INTO follows (follower_id, followee_id)
        VALUES ($1, $2)
        ON CONFLICT (follower_id, followee_id) DO NOTHING
        RETURNING id, follower_id, followee_id, created_at
        "#,
    )
    .bind(follower_id)
    .bind(followee_id)
    .fetch_optional(pool)
    .await
}

/// Idempotent delete; returns true if an edge was removed.
pub async fn delete(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM follows
        WHERE follower_id = $1 AND followee_id = $2
        "#,
    )
    .bind(follower_id)
    .bind(followee_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Whether follower follows followee.
pub async fn exists(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM follows
            WHERE follower_id = $1 AND followee_id = $2
        )
        "#,
    )
    .bind(follower_id)
    .bind(followee_id)
    .fetch_one(pool)
    .await
}

pub async fn follower_count(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM follows
        WHERE followee_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn following_count(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM follows
        WHERE follower_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Fetch one page probe of a user's followers, newest edge first.
pub async fn followers_page(
    pool: &PgPool,
    user_id: Uuid,
    probe_limit: i64,
    cursor: Option<DateTime<Utc>>,
) -> Result<Vec<FollowListRow>, sqlx::Error> {
    sqlx::query_as::<_, FollowListRow>(
        r#"
        SELECT u.id AS user_id, u.username, u.profile_image_url,
               f.created_at AS followed_at
        FROM follows f
        JOIN users u ON u.id = f.follower_id
        WHERE f.followee_id = $1
          AND ($2::timestamptz IS NULL OR f.created_at < $2)
        ORDER BY f.created_at DESC, f.id DESC
        LIMIT $3
        "#,
    )
    .bind(user_id)
    .bind(cursor)
    .bind(probe_limit)
    .fetch_all(pool)
    .await
}

/// Fetch one page probe of the users someone follows, newest edge first.
pub async fn following_page(
    pool: &PgPool,
    user_id: Uuid,
    probe_limit: i64,
    cursor: Option<DateTime<Utc>>,
) -> Result<Vec<FollowListRow>, sqlx::Error> {
    sqlx::query_as::<_, FollowListRow>(
        r#"
        SELECT u.id AS user_id, u.username, u.profile_image_url,
               f.created_at AS followed_at
        FROM follows f
        JOIN users u ON u.id = f.followee_id
        WHERE f.follower_id = $1
          AND ($2::timestamptz IS NULL OR f.created_at < $2)
        ORDER BY f.created_at DESC, f.id DESC
        LIMIT $3
        "#,
    )
    .bind(user_id)
    .bind(cursor)
    .bind(probe_limit)
    .fetch_all(pool)
    .await
}

/// Batch: of the given users, the ones the viewer follows. One query
/// regardless of page size.
pub async fn followees_among(
    pool: &PgPool,
    viewer_id: Uuid,
    user_ids: &[Uuid],
) -> Result<Vec<Uuid>, sqlx::Error> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_scalar(
        r#"
        SELECT followee_id
        FROM follows
        WHERE follower_id = $1 AND followee_id = ANY($2)
        "#,
    )
    .bind(viewer_id)
    .bind(user_ids)
    .fetch_all(pool)
    .await
}

/// Batch: of the given users, the ones who follow the viewer.
pub async fn followers_among(
    pool: &PgPool,
    viewer_id: Uuid,
    user_ids: &[Uuid],
) -> Result<Vec<Uuid>, sqlx::Error> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_scalar(
        r#"
        SELECT follower_id
        FROM follows
        WHERE followee_id = $1 AND follower_id = ANY($2)
        "#,
    )
    .bind(viewer_id)
    .bind(user_ids)
    .fetch_all(pool)
    .await
}
