use std::collections::HashMap;

use crate::models::{Review, UserProfile};

/// Display names and avatars keyed by user id. Presentation only; nothing in
/// the review store depends on it.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    profiles: HashMap<String, UserProfile>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: impl Into<String>, profile: UserProfile) {
        self.profiles.insert(user_id.into(), profile);
    }

    pub fn profile(&self, user_id: &str) -> Option<&UserProfile> {
        self.profiles.get(user_id)
    }

    pub fn author_of(&self, review: &Review) -> Option<&UserProfile> {
        self.profile(&review.customer_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, UserProfile)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (K, UserProfile)>>(iter: I) -> Self {
        Self {
            profiles: iter
                .into_iter()
                .map(|(user_id, profile)| (user_id.into(), profile))
                .collect(),
        }
    }
}
