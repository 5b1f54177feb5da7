//! Queries shared by the two image collections.
//!
//! `gallery_images` and `photos` have identical columns; the repositories
//! pass their (constant) table name in.

use companion_core::story::ImageRecord;
use sqlx::PgPool;

use crate::models::image::{CreateImage, ImageRow};

const COLUMNS: &str = "id, url, created_at";

pub(crate) async fn insert(
    pool: &PgPool,
    table: &'static str,
    input: &CreateImage,
) -> Result<ImageRecord, sqlx::Error> {
    let query = format!(
        "INSERT INTO {table} (id, url, created_at) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, ImageRow>(&query)
        .bind(&input.id)
        .bind(&input.url)
        .bind(input.created_at)
        .fetch_one(pool)
        .await?;
    Ok(row.into())
}

pub(crate) async fn list_newest_first(
    pool: &PgPool,
    table: &'static str,
) -> Result<Vec<ImageRecord>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM {table} ORDER BY created_at DESC, id DESC");
    let rows = sqlx::query_as::<_, ImageRow>(&query).fetch_all(pool).await?;
    Ok(rows.into_iter().map(ImageRecord::from).collect())
}

pub(crate) async fn find_by_id(
    pool: &PgPool,
    table: &'static str,
    id: &str,
) -> Result<Option<ImageRecord>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM {table} WHERE id = $1");
    let row = sqlx::query_as::<_, ImageRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(ImageRecord::from))
}

pub(crate) async fn delete(pool: &PgPool, table: &'static str, id: &str) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {table} WHERE id = $1");
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
