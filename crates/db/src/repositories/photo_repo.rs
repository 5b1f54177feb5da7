//! Repository for the `photos` table.

use companion_core::story::Photo;
use sqlx::PgPool;

use super::image_table;
use crate::models::image::CreateImage;

const TABLE: &str = "photos";

/// Create, list and delete photo wall entries.
pub struct PhotoRepo;

impl PhotoRepo {
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<Photo, sqlx::Error> {
        image_table::insert(pool, TABLE, input).await
    }

    /// List all photos, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Photo>, sqlx::Error> {
        image_table::list_newest_first(pool, TABLE).await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Photo>, sqlx::Error> {
        image_table::find_by_id(pool, TABLE, id).await
    }

    /// Permanently delete a photo. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        image_table::delete(pool, TABLE, id).await
    }
}
