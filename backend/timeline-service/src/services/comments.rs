/// Comment service - comment listing assembler plus the owning collaborator
/// operations (create, soft delete).
use crate::db::{comment_repo, post_repo};
use crate::db::comment_repo::CommentRow;
use crate::error::{AppError, Result};
use crate::models::{AuthorResponse, CommentResponse, PaginatedComments};
use crate::pagination::{Page, PageParams};
use sqlx::PgPool;
use uuid::Uuid;

/// Upper bound on comment text length, matching the client cap.
const MAX_COMMENT_LEN: usize = 2200;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a post's comments newest-first. Comment listings filter
    /// soft-deletes only; report suppression applies to post listings.
    pub async fn list_comments(
        &self,
        post_id: Uuid,
        params: &PageParams,
    ) -> Result<PaginatedComments> {
        self.require_visible_post(post_id).await?;

        let rows =
            comment_repo::comments_page(&self.pool, post_id, params.probe_limit(), params.cursor_time())
                .await?;
        let page = Page::assemble(rows, params.limit());

        Ok(PaginatedComments {
            next_cursor: page.next_cursor_encoded(),
            has_more: page.has_more,
            comments: page.items.into_iter().map(to_response).collect(),
        })
    }

    pub async fn create_comment(
        &self,
        viewer_id: Uuid,
        post_id: Uuid,
        text: &str,
    ) -> Result<CommentResponse> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("text must not be empty".to_string()));
        }
        if text.chars().count() > MAX_COMMENT_LEN {
            return Err(AppError::BadRequest(format!(
                "text must be at most {} characters",
                MAX_COMMENT_LEN
            )));
        }

        self.require_visible_post(post_id).await?;

        let comment = comment_repo::create_comment(&self.pool, post_id, viewer_id, text).await?;
        let row = comment_repo::comment_row(&self.pool, comment.id)
            .await?
            .ok_or_else(|| {
                AppError::Internal("created comment could not be read back".to_string())
            })?;

        Ok(to_response(row))
    }

    /// Soft delete; only the author may delete their comment.
    pub async fn delete_comment(&self, viewer_id: Uuid, comment_id: Uuid) -> Result<()> {
        let comment = comment_repo::find_comment(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {} not found", comment_id)))?;

        if !comment.state().is_visible() {
            return Err(AppError::NotFound(format!(
                "comment {} not found",
                comment_id
            )));
        }

        if comment.user_id != viewer_id {
            return Err(AppError::Forbidden(
                "only the author can delete a comment".to_string(),
            ));
        }

        comment_repo::soft_delete(&self.pool, comment_id).await?;
        Ok(())
    }

    async fn require_visible_post(&self, post_id: Uuid) -> Result<()> {
        let post = post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} not found", post_id)))?;

        if !post.state().is_visible() {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        Ok(())
    }
}

fn to_response(row: CommentRow) -> CommentResponse {
    CommentResponse {
        id: row.id,
        text: row.text,
        author: AuthorResponse {
            id: row.author_id,
            username: row.author_username,
            profile_image_url: row.author_profile_image_url,
        },
        created_at: row.created_at,
    }
}
