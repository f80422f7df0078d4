/// Feed handler - GET /feed
use crate::error::Result;
use crate::handlers::ListingQuery;
use crate::middleware::UserId;
use crate::pagination::{LimitRange, PageParams};
use crate::services::FeedService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use tracing::debug;

/// Paginated feed of visible posts, newest first, excluding posts the
/// viewer has reported.
pub async fn get_feed(
    pool: web::Data<PgPool>,
    viewer: UserId,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse> {
    let params = PageParams::new(query.limit, query.cursor.as_deref(), LimitRange::FEED)?;

    debug!(viewer = %viewer.0, limit = params.limit(), "feed request");

    let page = FeedService::new(pool.get_ref().clone())
        .list_posts(viewer.0, &params, None)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
