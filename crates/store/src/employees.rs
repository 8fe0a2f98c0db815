//! Data mapper for the `employees` table.
//!
//! The public API exposes no employee read path; `get` is here for tests
//! and for parity with the other mappers.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use zoo_core::{EmployeeRecord, NewEmployee};

use crate::StoreError;

pub async fn insert(pool: &SqlitePool, new: NewEmployee) -> Result<EmployeeRecord, StoreError> {
    let res = sqlx::query("INSERT INTO employees (name, address) VALUES ($1, $2)")
        .bind(&new.name)
        .bind(&new.address)
        .execute(pool)
        .await?;

    Ok(EmployeeRecord {
        id: res.last_insert_rowid(),
        name: new.name,
        address: new.address,
    })
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<EmployeeRecord>, StoreError> {
    let row = sqlx::query("SELECT id, name, address FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(from_row).transpose()
}

/// Hard delete; reports whether a row was actually removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let res = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(res.rows_affected() > 0)
}

fn from_row(row: SqliteRow) -> Result<EmployeeRecord, StoreError> {
    Ok(EmployeeRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZooStore;

    fn keeper() -> NewEmployee {
        NewEmployee {
            name: "Sam Keeper".into(),
            address: "1 Zoo Lane".into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_persists() {
        let store = ZooStore::in_memory().await.unwrap();

        let inserted = insert(store.pool(), keeper()).await.unwrap();
        assert_eq!(inserted.id, 1);

        let fetched = get(store.pool(), inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = ZooStore::in_memory().await.unwrap();

        let employee = insert(store.pool(), keeper()).await.unwrap();

        assert!(delete(store.pool(), employee.id).await.unwrap());
        assert!(!delete(store.pool(), employee.id).await.unwrap());
        assert!(get(store.pool(), employee.id).await.unwrap().is_none());
    }
}
