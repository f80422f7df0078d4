/// Post service - creates posts from already-stored image URLs and owns the
/// soft-delete transition. Media upload itself lives in the storage service.
use crate::db::post_repo;
use crate::error::{AppError, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// A post carries between one and nine images.
const MAX_IMAGES: usize = 9;

/// One image of a new post, already uploaded by the storage service.
#[derive(Debug, Clone)]
pub struct NewPostImage {
    pub image_url: String,
    pub original_file_name: Option<String>,
    pub mime_type: Option<String>,
}

/// Caption of a new post.
#[derive(Debug, Clone)]
pub struct NewCaption {
    pub text: String,
    pub is_bold: bool,
    pub is_italic: bool,
    pub font_size: i32,
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post with its images and optional caption; returns the new
    /// post id for the caller to re-read enriched.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        images: Vec<NewPostImage>,
        caption: Option<NewCaption>,
    ) -> Result<Uuid> {
        if images.is_empty() || images.len() > MAX_IMAGES {
            return Err(AppError::BadRequest(format!(
                "a post requires between 1 and {} images",
                MAX_IMAGES
            )));
        }

        let post = post_repo::create_post(&self.pool, author_id).await?;

        for (index, image) in images.into_iter().enumerate() {
            post_repo::insert_image(
                &self.pool,
                post.id,
                &image.image_url,
                index as i32,
                image.original_file_name.as_deref(),
                image.mime_type.as_deref(),
            )
            .await?;
        }

        if let Some(caption) = caption {
            if !caption.text.trim().is_empty() {
                post_repo::insert_caption(
                    &self.pool,
                    post.id,
                    &caption.text,
                    caption.is_bold,
                    caption.is_italic,
                    caption.font_size,
                    0,
                )
                .await?;
            }
        }

        Ok(post.id)
    }

    /// Soft delete; only the author may delete their post.
    pub async fn delete_post(&self, viewer_id: Uuid, post_id: Uuid) -> Result<()> {
        let post = post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} not found", post_id)))?;

        if !post.state().is_visible() {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        if post.user_id != viewer_id {
            return Err(AppError::Forbidden(
                "only the author can delete a post".to_string(),
            ));
        }

        post_repo::soft_delete(&self.pool, post_id).await?;
        Ok(())
    }
}
