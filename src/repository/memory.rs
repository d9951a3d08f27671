//! In-memory implementation of `ReviewRepository`.
//!
//! Reviews live in a `Vec` guarded by a `RwLock`, so iteration order is
//! insertion order. Everything is lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ReviewRepository;
use crate::error::{AppError, AppResult};
use crate::models::Review;

pub struct InMemoryRepository {
    reviews: RwLock<Vec<Review>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            reviews: RwLock::new(Vec::new()),
        }
    }

    /// Build a repository pre-populated with `reviews`, keeping their order.
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: RwLock::new(reviews),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn insert(&self, review: Review) -> AppResult<()> {
        let mut reviews = self.reviews.write().await;
        if reviews.iter().any(|existing| existing.id == review.id) {
            return Err(AppError::Internal(format!(
                "duplicate review id {}",
                review.id
            )));
        }
        reviews.push(review);
        Ok(())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().find(|review| review.id == id).cloned())
    }

    async fn replace(&self, review: Review) -> AppResult<()> {
        let mut reviews = self.reviews.write().await;
        match reviews.iter_mut().find(|existing| existing.id == review.id) {
            Some(slot) => {
                *slot = review;
                Ok(())
            }
            None => Err(AppError::NotFound(review.id)),
        }
    }

    async fn remove(&self, id: &str) -> AppResult<Option<Review>> {
        let mut reviews = self.reviews.write().await;
        Ok(reviews
            .iter()
            .position(|review| review.id == id)
            .map(|index| reviews.remove(index)))
    }

    async fn list_by_product(&self, product_id: &str) -> AppResult<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .filter(|review| review.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn len(&self) -> AppResult<usize> {
        Ok(self.reviews.read().await.len())
    }
}
