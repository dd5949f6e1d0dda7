//! Repository layer for database operations.
//!
//! Methods are organized across submodules by entity:
//! - `questions.rs` - question insert, delete, listing, search and quiz draws
//! - `categories.rs` - category listing and seeding

mod categories;
mod questions;

use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::domain::{Category, Question};

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Round-trip a trivial query to confirm the database is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn question_from_row(row: &SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

fn category_from_row(row: &SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::setup_test_db;

    #[tokio::test]
    async fn test_ping() {
        let (repo, _temp) = setup_test_db().await;
        repo.ping().await.expect("ping failed");
    }
}
