/// Report handler - POST /posts/{post_id}/reports
use crate::error::Result;
use crate::middleware::UserId;
use crate::models::ReportReason;
use crate::services::ReportService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for reporting a post
#[derive(Debug, Deserialize)]
pub struct CreateReportRequest {
    pub reason: ReportReason,
}

pub async fn create_report(
    pool: web::Data<PgPool>,
    viewer: UserId,
    post_id: web::Path<Uuid>,
    req: web::Json<CreateReportRequest>,
) -> Result<HttpResponse> {
    let report = ReportService::new(pool.get_ref().clone())
        .create_report(viewer.0, *post_id, req.reason)
        .await?;

    Ok(HttpResponse::Created().json(report))
}
