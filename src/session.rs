use crate::models::Review;

/// Identity of the caller a review operation runs on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn owns(&self, review: &Review) -> bool {
        review.customer_id == self.user_id
    }
}
