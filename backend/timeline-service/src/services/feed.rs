/// Feed listing assembler.
///
/// Pipeline per request: load the viewer's report-suppression set, run the
/// visibility-narrowed keyset probe, trim to a page, then resolve like
/// status, like/comment counts, images and captions in batch - one query per
/// relation kind, independent kinds awaited concurrently. A page is
/// all-or-nothing; any failed batch fails the request.
use crate::db::{comment_repo, like_repo, post_repo, report_repo};
use crate::db::post_repo::{FeedPageQuery, FeedRow};
use crate::error::{AppError, Result};
use crate::models::{
    AuthorResponse, CaptionResponse, FeedPostResponse, PaginatedPosts, PostCaption, PostImage,
    PostImageResponse,
};
use crate::pagination::{Page, PageParams};
use crate::relations;
use crate::visibility::ViewerVisibility;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

pub struct FeedService {
    pool: PgPool,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List visible posts newest-first, optionally restricted to one author.
    pub async fn list_posts(
        &self,
        viewer_id: Uuid,
        params: &PageParams,
        author_id: Option<Uuid>,
    ) -> Result<PaginatedPosts> {
        let reported = report_repo::reported_post_ids(&self.pool, viewer_id).await?;
        let visibility = ViewerVisibility::new(reported);
        let excluded = visibility.excluded_ids();

        let rows = post_repo::feed_page(
            &self.pool,
            &FeedPageQuery {
                probe_limit: params.probe_limit(),
                cursor: params.cursor_time(),
                exclude_post_ids: &excluded,
                author_id,
            },
        )
        .await?;

        let page = Page::assemble(rows, params.limit());
        debug!(
            viewer = %viewer_id,
            returned = page.items.len(),
            has_more = page.has_more,
            "feed page assembled"
        );

        let next_cursor = page.next_cursor_encoded();
        let has_more = page.has_more;
        let posts = self.enrich(viewer_id, page.items).await?;

        Ok(PaginatedPosts {
            posts,
            has_more,
            next_cursor,
        })
    }

    /// Fetch one visible post, enriched the same way as a feed item.
    pub async fn get_post(&self, viewer_id: Uuid, post_id: Uuid) -> Result<FeedPostResponse> {
        let row = post_repo::find_feed_row(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} not found", post_id)))?;

        let mut posts = self.enrich(viewer_id, vec![row]).await?;
        posts
            .pop()
            .ok_or_else(|| AppError::Internal("post enrichment returned no item".to_string()))
    }

    /// Resolve relationship flags and attachments for a page of rows.
    async fn enrich(
        &self,
        viewer_id: Uuid,
        rows: Vec<FeedRow>,
    ) -> Result<Vec<FeedPostResponse>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let ids = relations::dedup_ids(&post_ids);

        let (liked, like_counts, comment_counts, images, captions) = tokio::try_join!(
            like_repo::liked_among(&self.pool, viewer_id, &ids),
            like_repo::counts_by_post(&self.pool, &ids),
            comment_repo::count_by_post(&self.pool, &ids),
            post_repo::images_for_posts(&self.pool, &ids),
            post_repo::captions_for_posts(&self.pool, &ids),
        )?;

        let liked = relations::presence_map(&ids, liked);
        let like_counts = relations::count_map(&ids, like_counts);
        let comment_counts = relations::count_map(&ids, comment_counts);

        let mut images_by_post: HashMap<Uuid, Vec<PostImage>> = HashMap::new();
        for image in images {
            images_by_post.entry(image.post_id).or_default().push(image);
        }

        // Rows arrive ordered by order_index; the first caption per post wins.
        let mut caption_by_post: HashMap<Uuid, PostCaption> = HashMap::new();
        for caption in captions {
            caption_by_post.entry(caption.post_id).or_insert(caption);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let images = images_by_post
                    .remove(&row.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|image| PostImageResponse {
                        id: image.id,
                        image_url: image.image_url,
                        order_index: image.order_index,
                        original_file_name: image.original_file_name,
                        mime_type: image.mime_type,
                    })
                    .collect();

                let caption = caption_by_post.remove(&row.id).map(|caption| CaptionResponse {
                    id: caption.id,
                    text: caption.text,
                    is_bold: caption.is_bold,
                    is_italic: caption.is_italic,
                    font_size: caption.font_size,
                });

                FeedPostResponse {
                    id: row.id,
                    author: AuthorResponse {
                        id: row.author_id,
                        username: row.author_username,
                        profile_image_url: row.author_profile_image_url,
                    },
                    images,
                    caption,
                    like_count: like_counts.get(&row.id).copied().unwrap_or(0),
                    is_liked_by_me: liked.get(&row.id).copied().unwrap_or(false),
                    comment_count: comment_counts.get(&row.id).copied().unwrap_or(0),
                    created_at: row.created_at,
                }
            })
            .collect())
    }
}
