use serde::Deserialize;

use zoo_core::{AnimalRecord, EmployeeRecord, EnclosureRecord};

// -------------------------
// Request DTOs
// -------------------------
//
// Typed bodies: a missing required field fails deserialization, so handlers
// never see a half-populated create request.

#[derive(Debug, Deserialize)]
pub struct CreateAnimalRequest {
    pub common_name: String,
    pub species: String,
    /// Opaque text, stored as-is.
    pub age: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEnclosureRequest {
    pub name: String,
    pub area: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub address: String,
}

// -------------------------
// Projections
// -------------------------
//
// The fixed field set each entity exposes over the wire. Timestamps go out
// as RFC3339 or null.

pub fn animal_to_json(rec: &AnimalRecord) -> serde_json::Value {
    serde_json::json!({
        "id": rec.id,
        "common_name": rec.common_name,
        "species": rec.species,
        "age": rec.age,
        "feeding_record": rec.feeding_record.map(|t| t.to_rfc3339()),
        "vet": rec.vet.map(|t| t.to_rfc3339()),
    })
}

pub fn enclosure_to_json(rec: &EnclosureRecord) -> serde_json::Value {
    serde_json::json!({
        "id": rec.id,
        "name": rec.name,
        "area": rec.area,
        "clean": rec.clean.map(|t| t.to_rfc3339()),
    })
}

pub fn employee_to_json(rec: &EmployeeRecord) -> serde_json::Value {
    serde_json::json!({
        "id": rec.id,
        "name": rec.name,
        "address": rec.address,
    })
}
