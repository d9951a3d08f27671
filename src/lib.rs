pub mod config;
pub mod directory;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

pub use config::{Backend, Latency, ServiceConfig};
pub use directory::UserDirectory;
pub use error::{AppError, AppResult, ErrorKind};
pub use models::{DeleteAck, ListQuery, NewReview, Rating, Review, ReviewPage, ReviewPatch, UserProfile};
pub use repository::{InMemoryRepository, ReviewRepository, SqliteRepository};
pub use service::ReviewService;
pub use session::Session;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides
/// `default_filter`. Calling this twice is harmless.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build a service for `config`, seeding it with the bundled fixtures when
/// asked to.
pub async fn build_service(config: &ServiceConfig) -> AppResult<ReviewService> {
    let repo: Arc<dyn ReviewRepository> = match config.backend {
        Backend::Memory => Arc::new(InMemoryRepository::new()),
        Backend::Sqlite => Arc::new(SqliteRepository::open_in_memory()?),
    };
    tracing::info!(backend = ?config.backend, "review store ready");

    let service = ReviewService::new(repo, config.latency);
    if config.seed {
        service.seed(fixtures::seed_reviews()).await?;
    }
    Ok(service)
}
