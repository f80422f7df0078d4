/// Post handlers - create, read, soft-delete
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::{FeedService, NewCaption, NewPostImage, PostService};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for creating a post. Images are already uploaded; this
/// carries their stored URLs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub caption: Option<CreateCaptionRequest>,
    pub images: Vec<CreatePostImageRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostImageRequest {
    pub image_url: String,
    pub original_file_name: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaptionRequest {
    pub text: String,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub is_italic: bool,
    pub font_size: Option<i32>,
}

/// Create a post and return it enriched like a feed item.
pub async fn create_post(
    pool: web::Data<PgPool>,
    viewer: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let body = req.into_inner();

    let images = body
        .images
        .into_iter()
        .map(|image| NewPostImage {
            image_url: image.image_url,
            original_file_name: image.original_file_name,
            mime_type: image.mime_type,
        })
        .collect();

    let caption = body.caption.map(|caption| NewCaption {
        text: caption.text,
        is_bold: caption.is_bold,
        is_italic: caption.is_italic,
        font_size: caption.font_size.unwrap_or(14),
    });

    let post_id = PostService::new(pool.get_ref().clone())
        .create_post(viewer.0, images, caption)
        .await?;

    let post = FeedService::new(pool.get_ref().clone())
        .get_post(viewer.0, post_id)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// Get a single post, enriched like a feed item.
pub async fn get_post(
    pool: web::Data<PgPool>,
    viewer: UserId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post = FeedService::new(pool.get_ref().clone())
        .get_post(viewer.0, *post_id)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Soft delete a post (author only).
pub async fn delete_post(
    pool: web::Data<PgPool>,
    viewer: UserId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    PostService::new(pool.get_ref().clone())
        .delete_post(viewer.0, *post_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
