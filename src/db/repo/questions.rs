//! Question operations for the repository.

use sqlx::{QueryBuilder, Sqlite};
use tracing::debug;

use super::{question_from_row, Repository};
use crate::domain::search::contains_ignoring_case;
use crate::domain::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

impl Repository {
    /// Insert a question and return its generated id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_question(&self, question: &NewQuestion) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(question.question.as_str())
        .bind(question.answer.as_str())
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Delete a question by id. Returns false if no such question existed.
    pub async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM questions WHERE id = ?",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(question_from_row))
    }

    /// All questions ordered by id.
    pub async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM questions ORDER BY id ASC",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    ///
    /// Matching happens after loading so that case folding covers
    /// non-ASCII letters, which SQLite's `LIKE` does not.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let questions = self.list_questions().await?;
        let matches: Vec<Question> = questions
            .into_iter()
            .filter(|q| contains_ignoring_case(&q.question, term))
            .collect();

        debug!(term = %term, matches = matches.len(), "searched questions");
        Ok(matches)
    }

    /// Questions filed under `category`, ordered by id.
    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id ASC",
            QUESTION_COLUMNS
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Draw one question at random whose id is not in `excluded`.
    ///
    /// `category` restricts the draw when set. Returns `None` once every
    /// eligible question has been excluded.
    pub async fn random_unseen_question(
        &self,
        category: Option<i64>,
        excluded: &[i64],
    ) -> Result<Option<Question>, sqlx::Error> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM questions WHERE 1 = 1",
            QUESTION_COLUMNS
        ));

        if let Some(category) = category {
            builder.push(" AND category = ").push_bind(category);
        }

        // One JSON parameter regardless of list length; SQLite caps bind variables.
        if !excluded.is_empty() {
            let excluded_json =
                serde_json::to_string(excluded).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
            builder
                .push(" AND id NOT IN (SELECT value FROM json_each(")
                .push_bind(excluded_json)
                .push("))");
        }

        builder.push(" ORDER BY RANDOM() LIMIT 1");

        let row = builder.build().fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(question_from_row))
    }
}
