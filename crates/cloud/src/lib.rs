//! Outbound collaborators: the image CDN and the story submission relay.
//!
//! Both are expressed as object-safe async traits ([`cdn::ImageHost`],
//! [`relay::StoryRelay`]) so the API server holds `Arc<dyn …>` and tests can
//! substitute in-memory fakes. Every call is attempted exactly once.

pub mod cdn;
pub mod relay;
