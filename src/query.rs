use crate::models::{Rating, Review, ReviewPage};

/// Resolve a requested star filter. Values outside 1..=5 disable filtering.
pub fn star_filter(requested: Option<i64>) -> Option<Rating> {
    requested.and_then(Rating::new)
}

/// Apply the star filter and cut out one page.
///
/// `total` counts every review that passed the filter. Pages are 1-based;
/// page 0 and a zero limit yield an empty slice.
pub fn filter_and_paginate(
    reviews: Vec<Review>,
    stars: Option<Rating>,
    page: usize,
    limit: usize,
) -> ReviewPage {
    let filtered: Vec<Review> = match stars {
        Some(rating) => reviews
            .into_iter()
            .filter(|review| review.rating == rating)
            .collect(),
        None => reviews,
    };
    let total = filtered.len();

    let items = match page.checked_sub(1).and_then(|p| p.checked_mul(limit)) {
        Some(start) if limit > 0 => filtered.into_iter().skip(start).take(limit).collect(),
        _ => Vec::new(),
    };

    ReviewPage { items, total }
}

/// Number of pages needed to show `total` items, `limit` at a time.
pub fn page_count(total: usize, limit: usize) -> usize {
    if limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}
