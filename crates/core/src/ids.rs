//! Record id generation for gallery images and photos.
//!
//! Ids are `{prefix}_{unix_millis}_{suffix}` where the suffix is nine
//! lowercase base-36 characters. Uniqueness is statistical only; nothing
//! checks the store for collisions.

use chrono::Utc;
use rand::Rng;

/// Prefix for gallery image ids.
pub const GALLERY_PREFIX: &str = "img";

/// Prefix for photo ids.
pub const PHOTO_PREFIX: &str = "photo";

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new record id with the given prefix using the current time.
pub fn generate_record_id(prefix: &str) -> String {
    record_id_at(prefix, Utc::now().timestamp_millis(), &mut rand::rng())
}

/// Build a record id for a fixed timestamp and RNG.
pub fn record_id_at<R: Rng + ?Sized>(prefix: &str, unix_millis: i64, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{prefix}_{unix_millis}_{suffix}")
}

/// File name offered when a captured frame is downloaded.
pub fn capture_download_name(unix_millis: i64) -> String {
    format!("claudia-photo-{unix_millis}.jpg")
}
