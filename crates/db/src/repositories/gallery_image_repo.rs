//! Repository for the `gallery_images` table.

use companion_core::story::GalleryImage;
use sqlx::PgPool;

use super::image_table;
use crate::models::image::CreateImage;

const TABLE: &str = "gallery_images";

/// Create, list and delete gallery images. There is no update.
pub struct GalleryImageRepo;

impl GalleryImageRepo {
    /// Insert a new gallery image, returning the stored record.
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<GalleryImage, sqlx::Error> {
        image_table::insert(pool, TABLE, input).await
    }

    /// List all gallery images, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryImage>, sqlx::Error> {
        image_table::list_newest_first(pool, TABLE).await
    }

    /// Find a gallery image by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<GalleryImage>, sqlx::Error> {
        image_table::find_by_id(pool, TABLE, id).await
    }

    /// Permanently delete a gallery image. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        image_table::delete(pool, TABLE, id).await
    }
}
