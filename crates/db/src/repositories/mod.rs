//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

mod image_table;

pub mod gallery_image_repo;
pub mod photo_repo;
pub mod story_repo;

pub use gallery_image_repo::GalleryImageRepo;
pub use photo_repo::PhotoRepo;
pub use story_repo::StoryRepo;
