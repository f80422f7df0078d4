/// Comment handlers - listing plus create/delete
use crate::error::Result;
use crate::handlers::ListingQuery;
use crate::middleware::UserId;
use crate::pagination::{LimitRange, PageParams};
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for creating a comment
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Paginated comments of a post, newest first.
pub async fn get_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse> {
    let params = PageParams::new(query.limit, query.cursor.as_deref(), LimitRange::COMMENTS)?;

    let page = CommentService::new(pool.get_ref().clone())
        .list_comments(*post_id, &params)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Create a comment on a post.
pub async fn create_comment(
    pool: web::Data<PgPool>,
    viewer: UserId,
    post_id: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = CommentService::new(pool.get_ref().clone())
        .create_comment(viewer.0, *post_id, &req.text)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Soft delete a comment (author only).
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    viewer: UserId,
    comment_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    CommentService::new(pool.get_ref().clone())
        .delete_comment(viewer.0, *comment_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
