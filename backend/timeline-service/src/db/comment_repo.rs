use crate::models::Comment;
use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// One comment listing row with its author joined in
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRow {
    pub id: Uuid,
    pub text: String,
    pub author_id: Uuid,
    pub author_username: String,
    pub author_profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PageItem for CommentRow {
    fn page_timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fetch one page probe of a post's comments, newest first.
pub async fn comments_page(
    pool: &PgPool,
    post_id: Uuid,
    probe_limit: i64,
    cursor: Option<DateTime<Utc>>,
) -> Result<Vec<CommentRow>, sqlx::Error> {
    sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT c.id, c.text, c.user_id AS author_id, u.username AS author_username,
               u.profile_image_url AS author_profile_image_url, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.post_id = $1
          AND c.deleted_at IS NULL
          AND ($2::timestamptz IS NULL OR c.created_at < $2)
        ORDER BY c.created_at DESC, c.id DESC
        LIMIT $3
        "#,
    )
    .bind(post_id)
    .bind(cursor)
    .bind(probe_limit)
    .fetch_all(pool)
    .await
}

/// Create a new comment.
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, text)
        VALUES ($1, $2, $3)
        RETURNING id, post_id, user_id, text, created_at, deleted_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(text)
    .fetch_one(pool)
    .await
}

/// Find a comment regardless of lifecycle state; callers decide on visibility.
pub async fn find_comment(
    pool: &PgPool,
    comment_id: Uuid,
) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, text, created_at, deleted_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await
}

/// Find a visible comment with its author joined in.
pub async fn comment_row(
    pool: &PgPool,
    comment_id: Uuid,
) -> Result<Option<CommentRow>, sqlx::Error> {
    sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT c.id, c.text, c.user_id AS author_id, u.username AS author_username,
               u.profile_image_url AS author_profile_image_url, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.id = $1 AND c.deleted_at IS NULL
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await
}

/// Soft delete a comment. Returns false if it was already deleted.
pub async fn soft_delete(pool: &PgPool, comment_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE comments
        SET deleted_at = NOW()
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(comment_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Batch: visible comment count per post, one grouped query for the whole
/// page. Posts with no comments are simply absent from the result.
pub async fn count_by_post(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<(Uuid, i64)>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, (Uuid, i64)>(
        r#"
        SELECT post_id, COUNT(*)
        FROM comments
        WHERE post_id = ANY($1) AND deleted_at IS NULL
        GROUP BY post_id
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
}
