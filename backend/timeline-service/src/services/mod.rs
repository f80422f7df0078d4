/// Business logic layer for timeline-service
///
/// One service per subject type. The listing services (feed, comments,
/// follows) are stateless assemblers: narrow visibility, run the keyset
/// probe, trim, then resolve relationship flags in batch. The rest are the
/// thin collaborators that own subject lifecycles.
pub mod comments;
pub mod feed;
pub mod follows;
pub mod likes;
pub mod posts;
pub mod reports;
pub mod users;

pub use comments::CommentService;
pub use feed::FeedService;
pub use follows::FollowService;
pub use likes::LikeService;
pub use posts::{NewCaption, NewPostImage, PostService};
pub use reports::ReportService;
pub use users::UserService;
