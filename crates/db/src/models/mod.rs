//! Row models and insert DTOs.

pub mod image;
pub mod story;
