/// Brand kits and product images are keyed by UUID (v7, generated app-side).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
