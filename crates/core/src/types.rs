/// Application primary keys are server-assigned UUIDs.
pub type ApplicationId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
