use chrono::{DateTime, Utc};

/// A persisted enclosure row.
///
/// Enclosures do not reference the animals they house; the API exposes them
/// as independent records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosureRecord {
    pub id: i64,
    pub name: String,
    pub area: String,
    /// When the clean action last ran. Null until the first cleaning.
    pub clean: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for creating an enclosure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnclosure {
    pub name: String,
    pub area: String,
}
