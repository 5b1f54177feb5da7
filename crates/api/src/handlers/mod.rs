//! Request handlers for the `/api/v1` resources.
//!
//! Handlers delegate persistence to the repositories in `companion_db`,
//! outbound calls to the collaborators in [`AppState`](crate::state::AppState),
//! and map errors via [`AppError`](crate::error::AppError).

pub mod composite;
pub mod gallery_image;
pub mod photo;
pub mod story;
pub mod submission;
pub mod upload;

use serde::Serialize;

/// Body returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

impl DeleteResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
