/// User service - username resolution and profile summaries.
use crate::db::{follow_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{ProfileResponse, User};
use crate::relations::FollowStatus;
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a username or fail with 404.
    pub async fn require_by_username(&self, username: &str) -> Result<User> {
        user_repo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", username)))
    }

    /// Profile summary: counts plus both follow directions relative to the
    /// viewer.
    pub async fn profile(&self, viewer_id: Uuid, username: &str) -> Result<ProfileResponse> {
        let user = self.require_by_username(username).await?;

        let (post_count, follower_count, following_count) = tokio::try_join!(
            post_repo::count_by_author(&self.pool, user.id),
            follow_repo::follower_count(&self.pool, user.id),
            follow_repo::following_count(&self.pool, user.id),
        )?;

        let follow_status = if viewer_id == user.id {
            FollowStatus::default()
        } else {
            let (is_followed_by_me, is_following_me) = tokio::try_join!(
                follow_repo::exists(&self.pool, viewer_id, user.id),
                follow_repo::exists(&self.pool, user.id, viewer_id),
            )?;
            FollowStatus {
                is_followed_by_me,
                is_following_me,
            }
        };

        Ok(ProfileResponse {
            id: user.id,
            username: user.username,
            profile_image_url: user.profile_image_url,
            post_count,
            follower_count,
            following_count,
            follow_status,
        })
    }
}
