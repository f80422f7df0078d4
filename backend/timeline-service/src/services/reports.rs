/// Report service - records a viewer's report against a post.
///
/// Reports feed the viewer-specific suppression set of the feed listing; a
/// reported post stays visible to everyone else.
use crate::db::{post_repo, report_repo};
use crate::error::{AppError, Result};
use crate::models::{ReportReason, ReportResponse};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_report(
        &self,
        viewer_id: Uuid,
        post_id: Uuid,
        reason: ReportReason,
    ) -> Result<ReportResponse> {
        let post = post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} not found", post_id)))?;

        if !post.state().is_visible() {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        if report_repo::exists(&self.pool, viewer_id, post_id).await? {
            return Err(AppError::Conflict(
                "post already reported by this user".to_string(),
            ));
        }

        let report = report_repo::insert(&self.pool, viewer_id, post_id, reason.as_str()).await?;

        Ok(ReportResponse {
            id: report.id,
            post_id: report.post_id,
            reason: report.reason,
            created_at: report.created_at,
        })
    }
}
