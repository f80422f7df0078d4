/// Like handler - POST /posts/{post_id}/like toggles the viewer's like
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::LikeService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn toggle_like(
    pool: web::Data<PgPool>,
    viewer: UserId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let result = LikeService::new(pool.get_ref().clone())
        .toggle_like(viewer.0, *post_id)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
