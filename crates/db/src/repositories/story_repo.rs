//! Repository for the `stories` table.

use companion_core::language::Language;
use companion_core::story::Story;
use sqlx::PgPool;

use crate::models::story::{CreateStory, StoryRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, language, created_at";

/// Read access and bulk seeding for stories.
pub struct StoryRepo;

impl StoryRepo {
    /// List every story, oldest first, in seeding order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Story>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stories ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, StoryRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Story::from).collect())
    }

    /// List the stories written in one language.
    pub async fn list_by_language(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<Story>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM stories WHERE language = $1 ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, StoryRow>(&query)
            .bind(language.as_str())
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Story::from).collect())
    }

    /// Count the stories written in one language.
    pub async fn count_by_language(pool: &PgPool, language: Language) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM stories WHERE language = $1")
            .bind(language.as_str())
            .fetch_one(pool)
            .await
    }

    /// Replace the whole table with `stories` in one transaction.
    ///
    /// Returns the number of stories inserted.
    pub async fn replace_all(pool: &PgPool, stories: &[CreateStory]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM stories").execute(&mut *tx).await?;

        let mut inserted = 0;
        for story in stories {
            let result = sqlx::query(
                "INSERT INTO stories (id, text, language, created_at) VALUES ($1, $2, $3, NOW())",
            )
            .bind(&story.id)
            .bind(&story.text)
            .bind(story.language.as_str())
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
