/// HTTP handlers for timeline-service
///
/// Handlers validate parameters at the boundary, resolve path subjects
/// (username, post id), and delegate to the service layer with the viewer id
/// passed explicitly.
pub mod comments;
pub mod feed;
pub mod follows;
pub mod likes;
pub mod posts;
pub mod reports;
pub mod users;

// Re-export handler functions at module level
pub use comments::{create_comment, delete_comment, get_post_comments};
pub use feed::get_feed;
pub use follows::{get_followers, get_following, toggle_follow};
pub use likes::toggle_like;
pub use posts::{create_post, delete_post, get_post};
pub use reports::create_report;
pub use users::{get_profile, get_user_posts};

use serde::Deserialize;

/// Query parameters shared by every listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}
