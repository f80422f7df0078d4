/// Like service - toggles the (user, post) like edge.
use crate::db::{like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::LikeToggleResponse;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Like if not liked, unlike otherwise. Returns the resulting state and
    /// the post's current like count.
    pub async fn toggle_like(&self, viewer_id: Uuid, post_id: Uuid) -> Result<LikeToggleResponse> {
        let post = post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} not found", post_id)))?;

        if !post.state().is_visible() {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        let liked = match like_repo::insert(&self.pool, viewer_id, post_id).await? {
            Some(_) => true,
            None => {
                like_repo::delete(&self.pool, viewer_id, post_id).await?;
                false
            }
        };

        let like_count = like_repo::count_for_post(&self.pool, post_id).await?;

        Ok(LikeToggleResponse { liked, like_count })
    }
}
