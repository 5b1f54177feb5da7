/// Record identifiers are opaque strings (`it-3`, `img_1718000000000_k3j9x0a2b`).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
