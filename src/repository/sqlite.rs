//! SQLite-backed `ReviewRepository`.
//!
//! The database is opened in memory; nothing is written to disk. An
//! autoincrement `seq` column records insertion order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::ReviewRepository;
use crate::error::{AppError, AppResult};
use crate::models::{Rating, Review};

const REVIEW_COLUMNS: &str = "id, product_id, customer_id, title, description, rating, created_at";

pub struct SqliteRepository {
    conn: Mutex<Connection>,
}

impl SqliteRepository {
    pub fn open_in_memory() -> AppResult<Self> {
        tracing::debug!("Opening in-memory review database");
        let conn = Connection::open_in_memory()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS reviews (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                product_id TEXT NOT NULL,
                customer_id TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_reviews_product
             ON reviews(product_id, seq)",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::Internal("Lock poisoned".into()))
    }
}

fn review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    let raw_rating: i64 = row.get(5)?;
    let rating =
        Rating::new(raw_rating).ok_or(rusqlite::Error::IntegralValueOutOfRange(5, raw_rating))?;

    Ok(Review {
        id: row.get(0)?,
        product_id: row.get(1)?,
        customer_id: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        rating,
        created_at: row.get(6)?,
    })
}

#[async_trait]
impl ReviewRepository for SqliteRepository {
    async fn insert(&self, review: Review) -> AppResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO reviews (id, product_id, customer_id, title, description, rating, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                review.id,
                review.product_id,
                review.customer_id,
                review.title,
                review.description,
                review.rating.value(),
                review.created_at,
            ],
        )?;
        Ok(())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Review>> {
        let conn = self.lock()?;
        let review = conn
            .query_row(
                &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1"),
                params![id],
                review_from_row,
            )
            .optional()?;
        Ok(review)
    }

    async fn replace(&self, review: Review) -> AppResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE reviews
             SET product_id = ?2, customer_id = ?3, title = ?4, description = ?5,
                 rating = ?6, created_at = ?7
             WHERE id = ?1",
            params![
                review.id,
                review.product_id,
                review.customer_id,
                review.title,
                review.description,
                review.rating.value(),
                review.created_at,
            ],
        )?;

        if changed == 0 {
            return Err(AppError::NotFound(review.id));
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> AppResult<Option<Review>> {
        let conn = self.lock()?;
        let existing = conn
            .query_row(
                &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1"),
                params![id],
                review_from_row,
            )
            .optional()?;

        if existing.is_some() {
            conn.execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
        }
        Ok(existing)
    }

    async fn list_by_product(&self, product_id: &str) -> AppResult<Vec<Review>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE product_id = ?1 ORDER BY seq"
        ))?;

        let reviews = stmt
            .query_map(params![product_id], review_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reviews)
    }

    async fn len(&self) -> AppResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
