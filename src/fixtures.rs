//! Bundled demo dataset: a handful of shoppers and the reviews they left.

use crate::directory::UserDirectory;
use crate::models::{Rating, Review, UserProfile};

pub const CURRENT_USER_ID: &str = "user123";
pub const CURRENT_PRODUCT_ID: &str = "product001";

const USERS: [(&str, &str, &str); 15] = [
    ("user123", "Alex Johnson", "https://randomuser.me/api/portraits/men/32.jpg"),
    ("user456", "Sarah Miller", "https://randomuser.me/api/portraits/women/44.jpg"),
    ("user789", "David Chen", "https://randomuser.me/api/portraits/men/22.jpg"),
    ("user101", "Emma Wilson", "https://randomuser.me/api/portraits/women/29.jpg"),
    ("user202", "James Rodriguez", "https://randomuser.me/api/portraits/men/57.jpg"),
    ("user303", "Olivia Taylor", "https://randomuser.me/api/portraits/women/17.jpg"),
    ("user404", "Michael Brown", "https://randomuser.me/api/portraits/men/81.jpg"),
    ("user505", "Sophia Garcia", "https://randomuser.me/api/portraits/women/63.jpg"),
    ("user606", "Ethan Wilson", "https://randomuser.me/api/portraits/men/45.jpg"),
    ("user707", "Isabella Moore", "https://randomuser.me/api/portraits/women/89.jpg"),
    ("user808", "Noah Thompson", "https://randomuser.me/api/portraits/men/36.jpg"),
    ("user909", "Ava Martinez", "https://randomuser.me/api/portraits/women/12.jpg"),
    ("user010", "Jackson White", "https://randomuser.me/api/portraits/men/91.jpg"),
    ("user011", "Charlotte Lee", "https://randomuser.me/api/portraits/women/33.jpg"),
    ("user012", "Lucas Harris", "https://randomuser.me/api/portraits/men/29.jpg"),
];

// (id, product, customer, rating, created_at, title, description)
type SeedRow = (&'static str, &'static str, &'static str, u8, &'static str, &'static str, &'static str);

const REVIEWS: [SeedRow; 15] = [
    (
        "rev001", CURRENT_PRODUCT_ID, CURRENT_USER_ID, 5, "2025-04-20T00:00:00.000Z",
        "Excellent product, highly recommended!",
        "I've been using this for about a month now and I'm incredibly impressed. The quality is outstanding and it performs exactly as advertised. Would definitely buy again.",
    ),
    (
        "rev002", CURRENT_PRODUCT_ID, "user456", 4, "2025-04-15T00:00:00.000Z",
        "Good but could be better",
        "Overall satisfied with my purchase. The product works well but there are a few minor issues that could be improved. The interface isn't as intuitive as I hoped.",
    ),
    (
        "rev003", CURRENT_PRODUCT_ID, "user789", 2, "2025-04-05T00:00:00.000Z",
        "Disappointed with quality",
        "Not what I expected. The material feels cheap and it started showing wear after just a couple weeks. I expected better durability at this price point.",
    ),
    (
        "rev004", CURRENT_PRODUCT_ID, "user101", 1, "2025-04-18T00:00:00.000Z",
        "Absolutely terrible",
        "Complete waste of money. Broke within days and customer service was unhelpful. Would not recommend to anyone.",
    ),
    (
        "rev005", CURRENT_PRODUCT_ID, "user202", 3, "2025-03-30T00:00:00.000Z",
        "Just okay",
        "It's fine. Nothing spectacular but gets the job done. I was expecting more based on the price and reviews, but it's serviceable.",
    ),
    (
        "rev006", CURRENT_PRODUCT_ID, "user303", 5, "2025-04-01T00:00:00.000Z",
        "Fantastic design and functionality",
        "Love everything about it. The design is sleek and modern, and all features work perfectly. Shipping was fast too!",
    ),
    (
        "rev007", CURRENT_PRODUCT_ID, "user404", 2, "2025-04-07T00:00:00.000Z",
        "Doesn't match description",
        "Product doesn't match what was advertised. Color is different and it's smaller than what the dimensions stated.",
    ),
    (
        "rev008", CURRENT_PRODUCT_ID, "user505", 5, "2025-03-24T00:00:00.000Z",
        "Great value for money",
        "Really happy with this purchase. It's exactly what I needed and the price was reasonable compared to similar products.",
    ),
    (
        "rev009", "product002", "user606", 3, "2025-04-22T00:00:00.000Z",
        "Not compatible with my setup",
        "The product itself seems fine but it doesn't work with my existing equipment as advertised. Had to return it.",
    ),
    (
        "rev010", CURRENT_PRODUCT_ID, "user707", 4, "2025-04-10T00:00:00.000Z",
        "Solid performance so far",
        "Been using for a few weeks and it works great. The battery life is impressive and the design is practical for everyday use.",
    ),
    (
        "rev011", CURRENT_PRODUCT_ID, "user808", 5, "2025-03-12T00:00:00.000Z",
        "Perfect for my needs",
        "Exactly what I was looking for. Easy to use and works flawlessly. Highly recommend to anyone needing this type of product.",
    ),
    (
        "rev012", CURRENT_PRODUCT_ID, "user909", 3, "2025-03-19T00:00:00.000Z",
        "Expected more features",
        "It's okay but missing some features I thought would be included. The basic functionality works well though.",
    ),
    (
        "rev013", CURRENT_PRODUCT_ID, "user010", 1, "2025-04-14T00:00:00.000Z",
        "Completely unusable",
        "Do not buy this product. It stopped working after the first day and the company has ignored my emails requesting support.",
    ),
    (
        "rev014", CURRENT_PRODUCT_ID, "user011", 4, "2025-04-05T00:00:00.000Z",
        "Good product, slow shipping",
        "The product itself is great, but shipping took forever. Almost two weeks longer than estimated delivery time.",
    ),
    (
        "rev015", CURRENT_PRODUCT_ID, "user012", 5, "2025-04-17T00:00:00.000Z",
        "Worth every penny",
        "Exceeded all my expectations. The quality is outstanding and it makes my daily tasks so much easier. Would definitely recommend to friends and family.",
    ),
];

pub fn seed_reviews() -> Vec<Review> {
    REVIEWS
        .iter()
        .filter_map(|&(id, product_id, customer_id, rating, created_at, title, description)| {
            Some(Review {
                id: id.to_string(),
                product_id: product_id.to_string(),
                customer_id: customer_id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                rating: Rating::new(rating.into())?,
                created_at: created_at.to_string(),
            })
        })
        .collect()
}

pub fn user_directory() -> UserDirectory {
    USERS
        .iter()
        .map(|&(user_id, name, avatar)| {
            (
                user_id,
                UserProfile {
                    name: name.to_string(),
                    avatar: avatar.to_string(),
                },
            )
        })
        .collect()
}
