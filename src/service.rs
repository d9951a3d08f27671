use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::Latency;
use crate::error::{AppError, AppResult};
use crate::models::{DeleteAck, ListQuery, NewReview, Rating, Review, ReviewPage, ReviewPatch};
use crate::query::{filter_and_paginate, star_filter};
use crate::repository::{InMemoryRepository, ReviewRepository};
use crate::session::Session;

const ID_PREFIX: &str = "rev";
const ID_SUFFIX_LEN: usize = 6;

/// Review listing and authoring on top of a `ReviewRepository`.
///
/// Every operation waits out its configured latency before touching
/// storage. Mutations hold `write_gate` from lookup to write, so two of them
/// never interleave.
pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
    latency: Latency,
    write_gate: Mutex<()>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn ReviewRepository>, latency: Latency) -> Self {
        Self {
            repo,
            latency,
            write_gate: Mutex::new(()),
        }
    }

    pub fn in_memory(latency: Latency) -> Self {
        Self::new(Arc::new(InMemoryRepository::new()), latency)
    }

    pub fn repository(&self) -> &Arc<dyn ReviewRepository> {
        &self.repo
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Load existing records as-is, without latency or validation beyond
    /// what the repository enforces.
    pub async fn seed(&self, reviews: Vec<Review>) -> AppResult<usize> {
        let _gate = self.write_gate.lock().await;
        let count = reviews.len();
        for review in reviews {
            self.repo.insert(review).await?;
        }
        info!(count, "seeded review store");
        Ok(count)
    }

    pub async fn list_by_product(&self, product_id: &str, query: ListQuery) -> AppResult<ReviewPage> {
        simulate_latency(self.latency.list).await;

        let reviews = self.repo.list_by_product(product_id).await?;
        let page = filter_and_paginate(
            reviews,
            star_filter(query.star_filter),
            query.page,
            query.limit,
        );

        info!(
            product_id,
            star_filter = ?query.star_filter,
            page = query.page,
            limit = query.limit,
            returned = page.items.len(),
            total = page.total,
            "listed reviews"
        );
        Ok(page)
    }

    pub async fn create(&self, session: &Session, input: NewReview) -> AppResult<Review> {
        simulate_latency(self.latency.create).await;

        let validated = validate_new_review(input).map_err(|err| {
            warn!(user = session.user_id(), error = %err, "rejected review");
            err
        })?;

        let _gate = self.write_gate.lock().await;
        let id = self.fresh_id().await?;
        let review = Review {
            id,
            product_id: validated.product_id,
            customer_id: session.user_id().to_string(),
            title: validated.title,
            description: validated.description,
            rating: validated.rating,
            created_at: Utc::now().to_rfc3339(),
        };

        self.repo.insert(review.clone()).await?;
        info!(
            review_id = %review.id,
            product_id = %review.product_id,
            user = session.user_id(),
            rating = review.rating.value(),
            "created review"
        );
        Ok(review)
    }

    pub async fn update(&self, session: &Session, id: &str, patch: ReviewPatch) -> AppResult<Review> {
        simulate_latency(self.latency.update).await;

        let _gate = self.write_gate.lock().await;
        let existing = self.owned_review(session, id, "edit").await?;
        let updated = apply_patch(existing, patch)?;

        self.repo.replace(updated.clone()).await?;
        info!(review_id = id, user = session.user_id(), "updated review");
        Ok(updated)
    }

    pub async fn delete(&self, session: &Session, id: &str) -> AppResult<DeleteAck> {
        simulate_latency(self.latency.delete).await;

        let _gate = self.write_gate.lock().await;
        self.owned_review(session, id, "delete").await?;

        if self.repo.remove(id).await?.is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }
        info!(review_id = id, user = session.user_id(), "deleted review");
        Ok(DeleteAck { success: true })
    }

    /// Look up a review and make sure `session` wrote it.
    async fn owned_review(&self, session: &Session, id: &str, action: &str) -> AppResult<Review> {
        let review = self.repo.get(id).await?.ok_or_else(|| {
            warn!(review_id = id, "review not found");
            AppError::NotFound(id.to_string())
        })?;

        if !session.owns(&review) {
            warn!(
                review_id = id,
                user = session.user_id(),
                owner = %review.customer_id,
                "refused {} of another user's review",
                action
            );
            return Err(AppError::Unauthorized(format!(
                "you can only {action} your own reviews"
            )));
        }
        Ok(review)
    }

    async fn fresh_id(&self) -> AppResult<String> {
        loop {
            let candidate = generate_id();
            if !self.repo.contains(&candidate).await? {
                return Ok(candidate);
            }
            debug!(candidate = %candidate, "review id collision, regenerating");
        }
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        debug!(delay_ms = delay.as_millis() as u64, "simulating latency");
        tokio::time::sleep(delay).await;
    }
}

fn generate_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{ID_PREFIX}{}{suffix}", Utc::now().timestamp_millis())
}

struct ValidatedReview {
    product_id: String,
    title: String,
    description: String,
    rating: Rating,
}

fn validate_new_review(input: NewReview) -> AppResult<ValidatedReview> {
    Ok(ValidatedReview {
        product_id: required_text("productId", input.product_id)?,
        title: required_text("title", input.title)?,
        description: required_text("description", input.description)?,
        rating: match input.rating {
            None | Some(0) => return Err(missing_field("rating")),
            Some(value) => Rating::try_from(value)?,
        },
    })
}

fn required_text(field: &str, value: Option<String>) -> AppResult<String> {
    value
        .filter(|text| !text.is_empty())
        .ok_or_else(|| missing_field(field))
}

fn missing_field(field: &str) -> AppError {
    AppError::Validation(format!("missing required review field: {field}"))
}

/// Empty strings and a zero rating leave the stored value alone.
fn apply_patch(mut review: Review, patch: ReviewPatch) -> AppResult<Review> {
    if let Some(rating) = patch.rating.filter(|&value| value != 0) {
        review.rating = Rating::try_from(rating)?;
    }
    if let Some(title) = patch.title.filter(|text| !text.is_empty()) {
        review.title = title;
    }
    if let Some(description) = patch.description.filter(|text| !text.is_empty()) {
        review.description = description;
    }
    Ok(review)
}
