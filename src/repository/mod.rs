//! Storage abstraction for review records.
//!
//! `ReviewService` talks to storage only through `ReviewRepository`, so the
//! backend can be swapped without touching listing or authoring logic.

mod memory;
mod sqlite;

pub use memory::InMemoryRepository;
pub use sqlite::SqliteRepository;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Review;

/// Ordered collection of reviews.
///
/// Implementations must return reviews in insertion order, and `replace`
/// must keep a record at its original position.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Append a review. Fails if the id is already taken.
    async fn insert(&self, review: Review) -> AppResult<()>;

    async fn get(&self, id: &str) -> AppResult<Option<Review>>;

    /// Overwrite the record with the same id in place.
    ///
    /// Fails with `AppError::NotFound` when no such record exists.
    async fn replace(&self, review: Review) -> AppResult<()>;

    /// Remove a record, returning it if it existed.
    async fn remove(&self, id: &str) -> AppResult<Option<Review>>;

    /// All reviews for a product, in insertion order.
    async fn list_by_product(&self, product_id: &str) -> AppResult<Vec<Review>>;

    async fn len(&self) -> AppResult<usize>;

    async fn contains(&self, id: &str) -> AppResult<bool> {
        Ok(self.get(id).await?.is_some())
    }
}
