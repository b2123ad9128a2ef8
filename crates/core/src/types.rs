/// Occupation classification codes are plain integers and act as the
/// natural key of the catalog table.
pub type NocCode = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
