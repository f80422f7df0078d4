/// Follow service - follower/following listing assemblers plus the toggle
/// that owns the edge lifecycle.
use crate::db::follow_repo;
use crate::db::follow_repo::FollowListRow;
use crate::error::{AppError, Result};
use crate::models::{FollowToggleResponse, FollowUserResponse, PaginatedUsers};
use crate::pagination::{Page, PageParams};
use crate::relations::{self, FollowStatus};
use sqlx::PgPool;
use uuid::Uuid;

pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Follow if not following, unfollow otherwise.
    pub async fn toggle_follow(
        &self,
        viewer_id: Uuid,
        target_id: Uuid,
    ) -> Result<FollowToggleResponse> {
        if viewer_id == target_id {
            return Err(AppError::BadRequest(
                "cannot follow yourself".to_string(),
            ));
        }

        let followed = match follow_repo::insert(&self.pool, viewer_id, target_id).await? {
            Some(_) => true,
            None => {
                follow_repo::delete(&self.pool, viewer_id, target_id).await?;
                false
            }
        };

        let follower_count = follow_repo::follower_count(&self.pool, target_id).await?;

        Ok(FollowToggleResponse {
            followed,
            follower_count,
        })
    }

    /// List the users following `target_id`, newest edge first.
    pub async fn list_followers(
        &self,
        viewer_id: Uuid,
        target_id: Uuid,
        params: &PageParams,
    ) -> Result<PaginatedUsers> {
        let rows = follow_repo::followers_page(
            &self.pool,
            target_id,
            params.probe_limit(),
            params.cursor_time(),
        )
        .await?;

        self.assemble(viewer_id, rows, params).await
    }

    /// List the users `target_id` follows, newest edge first.
    pub async fn list_following(
        &self,
        viewer_id: Uuid,
        target_id: Uuid,
        params: &PageParams,
    ) -> Result<PaginatedUsers> {
        let rows = follow_repo::following_page(
            &self.pool,
            target_id,
            params.probe_limit(),
            params.cursor_time(),
        )
        .await?;

        self.assemble(viewer_id, rows, params).await
    }

    /// Both follow directions between the viewer and one user.
    pub async fn follow_status(&self, viewer_id: Uuid, target_id: Uuid) -> Result<FollowStatus> {
        if viewer_id == target_id {
            return Ok(FollowStatus::default());
        }

        let (is_followed_by_me, is_following_me) = tokio::try_join!(
            follow_repo::exists(&self.pool, viewer_id, target_id),
            follow_repo::exists(&self.pool, target_id, viewer_id),
        )?;

        Ok(FollowStatus {
            is_followed_by_me,
            is_following_me,
        })
    }

    /// Trim the probe result and resolve the viewer's follow status against
    /// every listed user. The listed edge and the viewer's own flags are
    /// independent: listing B's followers shows each entry's relation to the
    /// viewer, not to B.
    async fn assemble(
        &self,
        viewer_id: Uuid,
        rows: Vec<FollowListRow>,
        params: &PageParams,
    ) -> Result<PaginatedUsers> {
        let page = Page::assemble(rows, params.limit());

        let user_ids: Vec<Uuid> = page.items.iter().map(|row| row.user_id).collect();
        let ids = relations::dedup_ids(&user_ids);

        let (followed_by_viewer, following_viewer) = tokio::try_join!(
            follow_repo::followees_among(&self.pool, viewer_id, &ids),
            follow_repo::followers_among(&self.pool, viewer_id, &ids),
        )?;

        let status = relations::follow_status_map(&ids, followed_by_viewer, following_viewer);

        Ok(PaginatedUsers {
            next_cursor: page.next_cursor_encoded(),
            has_more: page.has_more,
            users: page
                .items
                .into_iter()
                .map(|row| FollowUserResponse {
                    id: row.user_id,
                    username: row.username,
                    profile_image_url: row.profile_image_url,
                    follow_status: status.get(&row.user_id).copied().unwrap_or_default(),
                    followed_at: row.followed_at,
                })
                .collect(),
        })
    }
}
