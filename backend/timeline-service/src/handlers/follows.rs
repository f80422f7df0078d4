/// Follow handlers - follower/following listings and the follow toggle.
/// Subjects are addressed by username; unknown usernames are a 404.
use crate::error::Result;
use crate::handlers::ListingQuery;
use crate::middleware::UserId;
use crate::pagination::{LimitRange, PageParams};
use crate::services::{FollowService, UserService};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Paginated followers of a user, newest edge first.
pub async fn get_followers(
    pool: web::Data<PgPool>,
    viewer: UserId,
    username: web::Path<String>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse> {
    let params = PageParams::new(query.limit, query.cursor.as_deref(), LimitRange::FOLLOW_LIST)?;

    let target = UserService::new(pool.get_ref().clone())
        .require_by_username(&username)
        .await?;

    let page = FollowService::new(pool.get_ref().clone())
        .list_followers(viewer.0, target.id, &params)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Paginated list of the users someone follows, newest edge first.
pub async fn get_following(
    pool: web::Data<PgPool>,
    viewer: UserId,
    username: web::Path<String>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse> {
    let params = PageParams::new(query.limit, query.cursor.as_deref(), LimitRange::FOLLOW_LIST)?;

    let target = UserService::new(pool.get_ref().clone())
        .require_by_username(&username)
        .await?;

    let page = FollowService::new(pool.get_ref().clone())
        .list_following(viewer.0, target.id, &params)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Toggle following a user.
pub async fn toggle_follow(
    pool: web::Data<PgPool>,
    viewer: UserId,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let target = UserService::new(pool.get_ref().clone())
        .require_by_username(&username)
        .await?;

    let result = FollowService::new(pool.get_ref().clone())
        .toggle_follow(viewer.0, target.id)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
