/// Timeline Service Library
///
/// REST backend for the Glimpse MVP: the main feed, post comments and
/// follower/following listings, plus the collaborator operations that own
/// those subjects (posting, commenting, liking, following, reporting).
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `services`: listing assemblers and subject-owning business logic
/// - `db`: sqlx repositories and keyset page probes
/// - `pagination`: cursor codec and limit+1 page trimming
/// - `relations`: batch relationship-flag resolution
/// - `visibility`: soft-delete state and viewer-specific suppression
/// - `models`: entities and response DTOs
/// - `middleware`: bearer-token validation
/// - `error`: error types and HTTP mapping
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod relations;
pub mod services;
pub mod visibility;

pub use config::Config;
pub use error::{AppError, Result};
