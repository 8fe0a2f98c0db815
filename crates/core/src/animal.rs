use chrono::{DateTime, Utc};

/// A persisted animal row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    pub id: i64,
    pub common_name: String,
    pub species: String,
    /// Opaque text ("5", "adult", "unknown"); never parsed as a number.
    pub age: String,
    /// When the feed action last ran. Null until the first feeding.
    pub feeding_record: Option<DateTime<Utc>>,
    /// When the vet-visit action last ran. Null until the first visit.
    ///
    /// The column is named `vet`; the action that writes it is not, so the
    /// two can never shadow each other.
    pub vet: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for creating an animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnimal {
    pub common_name: String,
    pub species: String,
    pub age: String,
}
