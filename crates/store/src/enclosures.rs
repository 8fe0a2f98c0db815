//! Data mapper for the `enclosures` table.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use zoo_core::{EnclosureRecord, NewEnclosure};

use crate::StoreError;

pub async fn insert(pool: &SqlitePool, new: NewEnclosure) -> Result<EnclosureRecord, StoreError> {
    let res = sqlx::query("INSERT INTO enclosures (name, area) VALUES ($1, $2)")
        .bind(&new.name)
        .bind(&new.area)
        .execute(pool)
        .await?;

    Ok(EnclosureRecord {
        id: res.last_insert_rowid(),
        name: new.name,
        area: new.area,
        clean: None,
    })
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<EnclosureRecord>, StoreError> {
    let row = sqlx::query("SELECT id, name, area, clean FROM enclosures WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(from_row).transpose()
}

/// All enclosures in storage (insertion) order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<EnclosureRecord>, StoreError> {
    let rows = sqlx::query("SELECT id, name, area, clean FROM enclosures ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(from_row).collect()
}

/// Hard delete; reports whether a row was actually removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let res = sqlx::query("DELETE FROM enclosures WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(res.rows_affected() > 0)
}

pub async fn set_clean(pool: &SqlitePool, id: i64, at: DateTime<Utc>) -> Result<bool, StoreError> {
    let res = sqlx::query("UPDATE enclosures SET clean = $1 WHERE id = $2")
        .bind(at)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(res.rows_affected() > 0)
}

fn from_row(row: SqliteRow) -> Result<EnclosureRecord, StoreError> {
    Ok(EnclosureRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        area: row.try_get("area")?,
        clean: row.try_get("clean")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZooStore;

    fn savanna() -> NewEnclosure {
        NewEnclosure {
            name: "Savanna".into(),
            area: "2000sqm".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = ZooStore::in_memory().await.unwrap();

        let inserted = insert(store.pool(), savanna()).await.unwrap();
        let fetched = get(store.pool(), inserted.id).await.unwrap().unwrap();

        assert_eq!(fetched, inserted);
        assert_eq!(fetched.clean, None);
    }

    #[tokio::test]
    async fn clean_timestamp_persists() {
        let store = ZooStore::in_memory().await.unwrap();

        let enclosure = insert(store.pool(), savanna()).await.unwrap();
        let cleaned_at = Utc::now();

        assert!(set_clean(store.pool(), enclosure.id, cleaned_at).await.unwrap());

        let fetched = get(store.pool(), enclosure.id).await.unwrap().unwrap();
        assert_eq!(fetched.clean, Some(cleaned_at));
    }

    #[tokio::test]
    async fn delete_absent_id_is_a_noop() {
        let store = ZooStore::in_memory().await.unwrap();

        assert!(!delete(store.pool(), 9).await.unwrap());
    }
}
