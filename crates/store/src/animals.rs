//! Data mapper for the `animals` table.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use zoo_core::{AnimalRecord, NewAnimal};

use crate::StoreError;

/// Insert a new animal with both timestamps unset; returns the stored row
/// with its assigned id.
pub async fn insert(pool: &SqlitePool, new: NewAnimal) -> Result<AnimalRecord, StoreError> {
    let res = sqlx::query("INSERT INTO animals (common_name, species, age) VALUES ($1, $2, $3)")
        .bind(&new.common_name)
        .bind(&new.species)
        .bind(&new.age)
        .execute(pool)
        .await?;

    Ok(AnimalRecord {
        id: res.last_insert_rowid(),
        common_name: new.common_name,
        species: new.species,
        age: new.age,
        feeding_record: None,
        vet: None,
    })
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<AnimalRecord>, StoreError> {
    let row = sqlx::query(
        "SELECT id, common_name, species, age, feeding_record, vet FROM animals WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(from_row).transpose()
}

/// All animals in storage (insertion) order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<AnimalRecord>, StoreError> {
    let rows = sqlx::query(
        "SELECT id, common_name, species, age, feeding_record, vet FROM animals ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(from_row).collect()
}

/// Hard delete; reports whether a row was actually removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let res = sqlx::query("DELETE FROM animals WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(res.rows_affected() > 0)
}

pub async fn set_feeding_record(
    pool: &SqlitePool,
    id: i64,
    at: DateTime<Utc>,
) -> Result<bool, StoreError> {
    let res = sqlx::query("UPDATE animals SET feeding_record = $1 WHERE id = $2")
        .bind(at)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(res.rows_affected() > 0)
}

pub async fn set_vet(pool: &SqlitePool, id: i64, at: DateTime<Utc>) -> Result<bool, StoreError> {
    let res = sqlx::query("UPDATE animals SET vet = $1 WHERE id = $2")
        .bind(at)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(res.rows_affected() > 0)
}

fn from_row(row: SqliteRow) -> Result<AnimalRecord, StoreError> {
    Ok(AnimalRecord {
        id: row.try_get("id")?,
        common_name: row.try_get("common_name")?,
        species: row.try_get("species")?,
        age: row.try_get("age")?,
        feeding_record: row.try_get("feeding_record")?,
        vet: row.try_get("vet")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZooStore;

    fn lion() -> NewAnimal {
        NewAnimal {
            common_name: "Leo".into(),
            species: "Lion".into(),
            age: "5".into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = ZooStore::in_memory().await.unwrap();

        let a = insert(store.pool(), lion()).await.unwrap();
        let b = insert(store.pool(), lion()).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.feeding_record, None);
        assert_eq!(a.vet, None);
    }

    #[tokio::test]
    async fn get_round_trips_inserted_fields() {
        let store = ZooStore::in_memory().await.unwrap();

        let inserted = insert(store.pool(), lion()).await.unwrap();
        let fetched = get(store.pool(), inserted.id).await.unwrap().unwrap();

        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn get_absent_id_is_none() {
        let store = ZooStore::in_memory().await.unwrap();

        assert!(get(store.pool(), 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = ZooStore::in_memory().await.unwrap();

        let animal = insert(store.pool(), lion()).await.unwrap();

        assert!(delete(store.pool(), animal.id).await.unwrap());
        assert!(!delete(store.pool(), animal.id).await.unwrap());
        assert!(get(store.pool(), animal.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn timestamps_persist_independently() {
        let store = ZooStore::in_memory().await.unwrap();

        let animal = insert(store.pool(), lion()).await.unwrap();
        let fed_at = Utc::now();

        assert!(set_feeding_record(store.pool(), animal.id, fed_at).await.unwrap());

        let fetched = get(store.pool(), animal.id).await.unwrap().unwrap();
        assert_eq!(fetched.feeding_record, Some(fed_at));
        assert_eq!(fetched.vet, None);
    }

    #[tokio::test]
    async fn set_on_absent_id_touches_nothing() {
        let store = ZooStore::in_memory().await.unwrap();

        assert!(!set_vet(store.pool(), 7, Utc::now()).await.unwrap());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = ZooStore::in_memory().await.unwrap();

        for name in ["Leo", "Mia", "Rex"] {
            let mut new = lion();
            new.common_name = name.into();
            insert(store.pool(), new).await.unwrap();
        }

        let all = list(store.pool()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|a| a.common_name.as_str()).collect();
        assert_eq!(names, ["Leo", "Mia", "Rex"]);
    }
}
