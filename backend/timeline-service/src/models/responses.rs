/// Wire shapes of the public API.
///
/// Every listing shares the `{ items, hasMore, nextCursor }` envelope; only
/// the items key differs per listing type (`posts` / `comments` / `users`).
use crate::relations::FollowStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author summary embedded in post and comment items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub username: String,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostImageResponse {
    pub id: Uuid,
    pub image_url: String,
    pub order_index: i32,
    pub original_file_name: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionResponse {
    pub id: Uuid,
    pub text: String,
    pub is_bold: bool,
    pub is_italic: bool,
    pub font_size: i32,
}

/// One feed item, enriched with viewer-relative flags and counts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPostResponse {
    pub id: Uuid,
    pub author: AuthorResponse,
    pub images: Vec<PostImageResponse>,
    pub caption: Option<CaptionResponse>,
    pub like_count: i64,
    pub is_liked_by_me: bool,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPosts {
    pub posts: Vec<FeedPostResponse>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub text: String,
    pub author: AuthorResponse,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedComments {
    pub comments: Vec<CommentResponse>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// One entry of a follower/following list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUserResponse {
    pub id: Uuid,
    pub username: String,
    pub profile_image_url: Option<String>,
    pub follow_status: FollowStatus,
    pub followed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsers {
    pub users: Vec<FollowUserResponse>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub like_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowToggleResponse {
    pub followed: bool,
    pub follower_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub profile_image_url: Option<String>,
    pub post_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
    pub follow_status: FollowStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
