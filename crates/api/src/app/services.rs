//! Service layer: one method per API operation.
//!
//! The store modules stay plain data mappers; the timestamp actions (feed,
//! vet visit, clean) live here as load-stamp-save methods. Concurrent calls
//! against the same id are not coordinated: each call writes "now" and
//! last-write-wins is the intended semantics.

use chrono::Utc;
use thiserror::Error;

use zoo_core::{
    AnimalRecord, EmployeeRecord, EnclosureRecord, NewAnimal, NewEmployee, NewEnclosure,
};
use zoo_store::{StoreError, ZooStore, animals, employees, enclosures};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The id addressed no stored record.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The store itself failed; fatal to the request.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ZooServices {
    store: ZooStore,
}

impl ZooServices {
    pub fn new(store: ZooStore) -> Self {
        Self { store }
    }

    // --- animals ---

    pub async fn create_animal(&self, new: NewAnimal) -> Result<AnimalRecord, ServiceError> {
        Ok(animals::insert(self.store.pool(), new).await?)
    }

    pub async fn get_animal(&self, id: i64) -> Result<AnimalRecord, ServiceError> {
        animals::get(self.store.pool(), id)
            .await?
            .ok_or(ServiceError::NotFound("animal"))
    }

    pub async fn list_animals(&self) -> Result<Vec<AnimalRecord>, ServiceError> {
        Ok(animals::list(self.store.pool()).await?)
    }

    pub async fn delete_animal(&self, id: i64) -> Result<(), ServiceError> {
        if animals::delete(self.store.pool(), id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("animal"))
        }
    }

    /// Stamp the animal's feeding record with the current time.
    pub async fn feed_animal(&self, id: i64) -> Result<AnimalRecord, ServiceError> {
        let mut animal = self.get_animal(id).await?;
        let now = Utc::now();
        if !animals::set_feeding_record(self.store.pool(), id, now).await? {
            // Deleted between the read and the write.
            return Err(ServiceError::NotFound("animal"));
        }
        animal.feeding_record = Some(now);
        Ok(animal)
    }

    /// Stamp the animal's `vet` column with the current time.
    pub async fn record_vet_visit(&self, id: i64) -> Result<AnimalRecord, ServiceError> {
        let mut animal = self.get_animal(id).await?;
        let now = Utc::now();
        if !animals::set_vet(self.store.pool(), id, now).await? {
            return Err(ServiceError::NotFound("animal"));
        }
        animal.vet = Some(now);
        Ok(animal)
    }

    // --- enclosures ---

    pub async fn create_enclosure(
        &self,
        new: NewEnclosure,
    ) -> Result<EnclosureRecord, ServiceError> {
        Ok(enclosures::insert(self.store.pool(), new).await?)
    }

    pub async fn list_enclosures(&self) -> Result<Vec<EnclosureRecord>, ServiceError> {
        Ok(enclosures::list(self.store.pool()).await?)
    }

    pub async fn delete_enclosure(&self, id: i64) -> Result<(), ServiceError> {
        if enclosures::delete(self.store.pool(), id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("enclosure"))
        }
    }

    /// Stamp the enclosure's clean timestamp with the current time.
    pub async fn clean_enclosure(&self, id: i64) -> Result<EnclosureRecord, ServiceError> {
        let mut enclosure = enclosures::get(self.store.pool(), id)
            .await?
            .ok_or(ServiceError::NotFound("enclosure"))?;
        let now = Utc::now();
        if !enclosures::set_clean(self.store.pool(), id, now).await? {
            return Err(ServiceError::NotFound("enclosure"));
        }
        enclosure.clean = Some(now);
        Ok(enclosure)
    }

    // --- employees ---

    pub async fn create_employee(&self, new: NewEmployee) -> Result<EmployeeRecord, ServiceError> {
        Ok(employees::insert(self.store.pool(), new).await?)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ServiceError> {
        if employees::delete(self.store.pool(), id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("employee"))
        }
    }
}
