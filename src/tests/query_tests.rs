// Category 3: Query Layer Tests (query.rs)
// Tests for star filtering and pagination over an in-order review list

use crate::models::Rating;
use crate::query::{filter_and_paginate, page_count, star_filter};
use crate::tests::support::{review, PRODUCT};

fn ratings(values: &[i64]) -> Vec<crate::models::Review> {
    values
        .iter()
        .enumerate()
        .map(|(i, &rating)| review(&format!("r{i}"), PRODUCT, "user123", rating))
        .collect()
}

/// Test Case 3.1: Star filter only applies within 1..=5
#[test]
fn test_star_filter_range() {
    assert_eq!(star_filter(Some(3)), Rating::new(3));
    assert_eq!(star_filter(Some(0)), None);
    assert_eq!(star_filter(Some(6)), None);
    assert_eq!(star_filter(Some(-2)), None);
    assert_eq!(star_filter(None), None);
}

/// Test Case 3.2: Star filter is an exact match, not a threshold
#[test]
fn test_filter_exact_match() {
    let page = filter_and_paginate(ratings(&[5, 4, 5, 3, 1]), Rating::new(4), 1, 10);
    assert_eq!(page.total, 1);
    assert!(page.items.iter().all(|r| r.rating.value() == 4));
}

/// Test Case 3.3: Total counts filtered matches regardless of page
#[test]
fn test_total_independent_of_page() {
    for page in 1..=4 {
        let result = filter_and_paginate(ratings(&[1, 2, 3, 4, 5, 1, 2]), None, page, 3);
        assert_eq!(result.total, 7);
        assert!(result.items.len() <= 3);
    }
}

/// Test Case 3.4: Concatenated pages reconstruct the filtered set once
#[test]
fn test_pages_reconstruct_set() {
    let source = ratings(&[5, 2, 5, 5, 1, 5, 3, 5]);
    let expected: Vec<String> = source
        .iter()
        .filter(|r| r.rating.value() == 5)
        .map(|r| r.id.clone())
        .collect();

    let limit = 2;
    let pages = page_count(expected.len(), limit);
    let mut seen = Vec::new();
    for page in 1..=pages {
        let result = filter_and_paginate(source.clone(), Rating::new(5), page, limit);
        seen.extend(result.items.into_iter().map(|r| r.id));
    }
    assert_eq!(seen, expected);
}

/// Test Case 3.5: Page beyond the end is empty but keeps the total
#[test]
fn test_page_past_end() {
    let result = filter_and_paginate(ratings(&[5, 4, 3]), None, 2, 10);
    assert!(result.items.is_empty());
    assert_eq!(result.total, 3);
}

/// Test Case 3.6: Page zero and limit zero yield empty slices
#[test]
fn test_degenerate_paging() {
    let zero_page = filter_and_paginate(ratings(&[5, 4]), None, 0, 10);
    assert!(zero_page.items.is_empty());
    assert_eq!(zero_page.total, 2);

    let zero_limit = filter_and_paginate(ratings(&[5, 4]), None, 1, 0);
    assert!(zero_limit.items.is_empty());
    assert_eq!(zero_limit.total, 2);
}

/// Test Case 3.7: Page count rounds up
#[test]
fn test_page_count() {
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(8, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(5, 0), 0);
}
