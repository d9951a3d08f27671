// Shared helpers for building reviews and services in tests

use std::sync::Arc;

use crate::config::Latency;
use crate::models::{Rating, Review};
use crate::repository::{InMemoryRepository, ReviewRepository};
use crate::service::ReviewService;

pub const PRODUCT: &str = "product001";
pub const OTHER_PRODUCT: &str = "product002";
pub const OWNER: &str = "user123";
pub const STRANGER: &str = "user456";

pub fn review(id: &str, product_id: &str, customer_id: &str, rating: i64) -> Review {
    Review {
        id: id.to_string(),
        product_id: product_id.to_string(),
        customer_id: customer_id.to_string(),
        title: format!("Title {id}"),
        description: format!("Description {id}"),
        rating: Rating::new(rating).expect("test rating in range"),
        created_at: "2025-04-01T00:00:00.000Z".to_string(),
    }
}

/// Eight reviews for `PRODUCT` (three of them five-star) and two for
/// `OTHER_PRODUCT`, interleaved.
pub fn scenario_reviews() -> Vec<Review> {
    vec![
        review("r1", PRODUCT, OWNER, 5),
        review("r2", PRODUCT, STRANGER, 4),
        review("r3", OTHER_PRODUCT, "user789", 5),
        review("r4", PRODUCT, "user789", 2),
        review("r5", PRODUCT, "user101", 1),
        review("r6", PRODUCT, "user202", 5),
        review("r7", OTHER_PRODUCT, OWNER, 3),
        review("r8", PRODUCT, "user303", 3),
        review("r9", PRODUCT, "user404", 5),
        review("r10", PRODUCT, "user505", 2),
    ]
}

/// Zero-latency in-memory service seeded with `reviews`. The repository
/// handle is returned so tests can inspect the store directly.
pub fn service_with(reviews: Vec<Review>) -> (ReviewService, Arc<dyn ReviewRepository>) {
    let repo: Arc<dyn ReviewRepository> = Arc::new(InMemoryRepository::with_reviews(reviews));
    (ReviewService::new(repo.clone(), Latency::none()), repo)
}
