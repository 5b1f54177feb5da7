//! Row model shared by `gallery_images` and `photos`.

use companion_core::story::ImageRecord;
use companion_core::types::Timestamp;
use sqlx::FromRow;

/// A row from `gallery_images` or `photos`.
#[derive(Debug, Clone, FromRow)]
pub struct ImageRow {
    pub id: String,
    pub url: String,
    pub created_at: Timestamp,
}

impl From<ImageRow> for ImageRecord {
    fn from(row: ImageRow) -> Self {
        ImageRecord {
            id: row.id,
            url: row.url,
            created_at: row.created_at,
        }
    }
}

/// DTO for inserting an image record. The id is generated by the caller.
#[derive(Debug, Clone)]
pub struct CreateImage {
    pub id: String,
    pub url: String,
    pub created_at: Timestamp,
}
