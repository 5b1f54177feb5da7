//! Domain logic for the companion site.
//!
//! Everything here is free of I/O: story presentation order, overlay
//! compositing, record id generation, data-URL handling and the UI
//! translation table. The database, HTTP and CDN layers live in sibling
//! crates and depend on these types.

pub mod capture;
pub mod data_url;
pub mod deck;
pub mod error;
pub mod hashing;
pub mod ids;
pub mod language;
pub mod story;
pub mod types;
