/// Database access layer
///
/// Free-function repositories over `&PgPool`, one module per table. Listing
/// repositories expose keyset page probes (`created_at < cursor`, ordered
/// `created_at DESC, id DESC`, `LIMIT probe`) and the batch lookups the
/// relationship resolver consumes (one query per relation kind).
pub mod comment_repo;
pub mod follow_repo;
pub mod like_repo;
pub mod post_repo;
pub mod report_repo;
pub mod user_repo;
