//! Category operations for the repository.

use tracing::info;

use super::{category_from_row, Repository};
use crate::domain::Category;

impl Repository {
    /// Insert a category with an explicit id, replacing its name if the id exists.
    pub async fn upsert_category(&self, id: i64, kind: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, type) VALUES (?, ?)
            ON CONFLICT(id) DO UPDATE SET type = excluded.type
            "#,
        )
        .bind(id)
        .bind(kind)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert any of `categories` whose id is not present yet.
    ///
    /// Returns the number of rows added.
    pub async fn seed_categories(&self, categories: &[(i64, &str)]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0u64;
        let mut tx = self.pool.begin().await?;

        for (id, kind) in categories {
            let result = sqlx::query(
                "INSERT INTO categories (id, type) VALUES (?, ?) ON CONFLICT(id) DO NOTHING",
            )
            .bind(*id)
            .bind(*kind)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        info!(inserted, "seeded categories");
        Ok(inserted)
    }

    /// All categories ordered by name.
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY type ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }
}
