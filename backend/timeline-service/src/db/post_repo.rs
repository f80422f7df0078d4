use crate::models::{Post, PostCaption, PostImage};
use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// One feed candidate row with its author joined in
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeedRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub author_profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PageItem for FeedRow {
    fn page_timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Parameters of the feed candidate query. One explicit query takes all
/// filters; nothing is chained together at call sites.
#[derive(Debug)]
pub struct FeedPageQuery<'a> {
    /// `limit + 1`, so the caller can learn whether more rows exist
    pub probe_limit: i64,
    /// Keyset boundary: only rows strictly older than this are returned
    pub cursor: Option<DateTime<Utc>>,
    /// Viewer-reported posts, excluded before the probe
    pub exclude_post_ids: &'a [Uuid],
    /// Restrict to one author (profile post listing)
    pub author_id: Option<Uuid>,
}

/// Fetch one page probe of feed candidates, newest first.
pub async fn feed_page(
    pool: &PgPool,
    query: &FeedPageQuery<'_>,
) -> Result<Vec<FeedRow>, sqlx::Error> {
    sqlx::query_as::<_, FeedRow>(
        r#"
        SELECT p.id, p.user_id AS author_id, u.username AS author_username,
               u.profile_image_url AS author_profile_image_url, p.created_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.deleted_at IS NULL
          AND p.id <> ALL($1)
          AND ($2::timestamptz IS NULL OR p.created_at < $2)
          AND ($3::uuid IS NULL OR p.user_id = $3)
        ORDER BY p.created_at DESC, p.id DESC
        LIMIT $4
        "#,
    )
    .bind(query.exclude_post_ids)
    .bind(query.cursor)
    .bind(query.author_id)
    .bind(query.probe_limit)
    .fetch_all(pool)
    .await
}

/// Create a new post row; images and caption are attached separately.
pub async fn create_post(pool: &PgPool, user_id: Uuid) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id)
        VALUES ($1)
        RETURNING id, user_id, created_at, deleted_at
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Find a post regardless of lifecycle state; callers decide on visibility.
pub async fn find_post(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, created_at, deleted_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// Find a visible post with its author joined in.
pub async fn find_feed_row(pool: &PgPool, post_id: Uuid) -> Result<Option<FeedRow>, sqlx::Error> {
    sqlx::query_as::<_, FeedRow>(
        r#"
        SELECT p.id, p.user_id AS author_id, u.username AS author_username,
               u.profile_image_url AS author_profile_image_url, p.created_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.id = $1 AND p.deleted_at IS NULL
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// Soft delete a post. Returns false if it was already deleted.
pub async fn soft_delete(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET deleted_at = NOW()
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Count visible posts by an author.
pub async fn count_by_author(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM posts
        WHERE user_id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Attach an image to a post.
pub async fn insert_image(
    pool: &PgPool,
    post_id: Uuid,
    image_url: &str,
    order_index: i32,
    original_file_name: Option<&str>,
    mime_type: Option<&str>,
) -> Result<PostImage, sqlx::Error> {
    sqlx::query_as::<_, PostImage>(
        r#"
        INSERT INTO post_images (post_id, image_url, order_index, original_file_name, mime_type)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, post_id, image_url, order_index, original_file_name, mime_type, created_at
        "#,
    )
    .bind(post_id)
    .bind(image_url)
    .bind(order_index)
    .bind(original_file_name)
    .bind(mime_type)
    .fetch_one(pool)
    .await
}

/// Batch-fetch the images of a page of posts, ordered within each post.
pub async fn images_for_posts(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<PostImage>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, PostImage>(
        r#"
        SELECT id, post_id, image_url, order_index, original_file_name, mime_type, created_at
        FROM post_images
        WHERE post_id = ANY($1)
        ORDER BY post_id, order_index
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
}

/// Attach a caption to a post.
pub async fn insert_caption(
    pool: &PgPool,
    post_id: Uuid,
    text: &str,
    is_bold: bool,
    is_italic: bool,
    font_size: i32,
    order_index: i32,
) -> Result<PostCaption, sqlx::Error> {
    sqlx::query_as::<_, PostCaption>(
        r#"
        INSERT INTO post_captions (post_id, text, is_bold, is_italic, font_size, order_index)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, post_id, text, is_bold, is_italic, font_size, order_index, created_at
        "#,
    )
    .bind(post_id)
    .bind(text)
    .bind(is_bold)
    .bind(is_italic)
    .bind(font_size)
    .bind(order_index)
    .fetch_one(pool)
    .await
}

/// Batch-fetch the captions of a page of posts, ordered within each post.
pub async fn captions_for_posts(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<PostCaption>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, PostCaption>(
        r#"
        SELECT id, post_id, text, is_bold, is_italic, font_size, order_index, created_at
        FROM post_captions
        WHERE post_id = ANY($1)
        ORDER BY post_id, order_index
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
}
