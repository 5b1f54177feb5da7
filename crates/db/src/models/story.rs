//! Story row model and DTOs.

use companion_core::language::Language;
use companion_core::story::Story;
use companion_core::types::Timestamp;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `stories` table.
#[derive(Debug, Clone, FromRow)]
pub struct StoryRow {
    pub id: String,
    pub text: String,
    pub language: String,
    pub created_at: Timestamp,
}

impl From<StoryRow> for Story {
    /// The table constrains `language`, so an unparseable tag only happens on
    /// hand-edited rows; those are read as the primary language.
    fn from(row: StoryRow) -> Self {
        let language = row.language.parse().unwrap_or_else(|_| {
            tracing::warn!(id = %row.id, language = %row.language, "Unknown story language, assuming primary");
            Language::PRIMARY
        });
        Story {
            id: row.id,
            text: row.text,
            language,
            created_at: row.created_at,
        }
    }
}

/// DTO for seeding a story.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStory {
    pub id: String,
    pub text: String,
    pub language: Language,
}
