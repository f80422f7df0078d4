/// User handlers - profile summary and per-author post listing
use crate::error::Result;
use crate::handlers::ListingQuery;
use crate::middleware::UserId;
use crate::pagination::{LimitRange, PageParams};
use crate::services::{FeedService, UserService};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Profile summary with counts and viewer-relative follow status.
pub async fn get_profile(
    pool: web::Data<PgPool>,
    viewer: UserId,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let profile = UserService::new(pool.get_ref().clone())
        .profile(viewer.0, &username)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// A user's posts: the feed listing restricted to one author.
pub async fn get_user_posts(
    pool: web::Data<PgPool>,
    viewer: UserId,
    username: web::Path<String>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse> {
    let params = PageParams::new(query.limit, query.cursor.as_deref(), LimitRange::FEED)?;

    let target = UserService::new(pool.get_ref().clone())
        .require_by_username(&username)
        .await?;

    let page = FeedService::new(pool.get_ref().clone())
        .list_posts(viewer.0, &params, Some(target.id))
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
