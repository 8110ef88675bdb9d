//! Customer repository
//!
//! Full-row create/read/update/delete against `customers`.
//! Update and delete use RETURNING / rows_affected rather than a
//! lookup-then-write, so a missing id costs one statement.

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewCustomer;

const RESOURCE: &str = "Customer";

/// Customer record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a customer and return it with its generated id.
    pub async fn create(&self, customer: &NewCustomer) -> Result<CustomerRow, DbError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, phone, email)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, phone, email
            "#,
        )
        .bind(customer.name())
        .bind(customer.phone())
        .bind(customer.email())
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<CustomerRow, DbError> {
        sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, phone, email FROM customers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    /// All customers, oldest id first.
    pub async fn list(&self) -> Result<Vec<CustomerRow>, DbError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, phone, email FROM customers ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrite every field of an existing customer.
    pub async fn update(&self, id: i64, customer: &NewCustomer) -> Result<CustomerRow, DbError> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET name = ?1, phone = ?2, email = ?3
            WHERE id = ?4
            RETURNING id, name, phone, email
            "#,
        )
        .bind(customer.name())
        .bind(customer.phone())
        .bind(customer.email())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    async fn store() -> Store {
        let store = Store::open_in_memory().await.expect("open failed");
        store.migrate().await.expect("migrate failed");
        store
    }

    fn customer(name: &str, phone: &str, email: &str) -> NewCustomer {
        NewCustomer::new(name, phone, email).unwrap()
    }

    #[tokio::test]
    async fn create_then_get() {
        let store = store().await;
        let repo = CustomerRepo::new(store.pool());

        let created = repo.create(&customer("A", "1", "a@x.com")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "A");
        assert_eq!(fetched.phone, "1");
        assert_eq!(fetched.email, "a@x.com");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = store().await;
        let err = CustomerRepo::new(store.pool()).get(42).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "Customer",
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn list_returns_all_in_id_order() {
        let store = store().await;
        let repo = CustomerRepo::new(store.pool());
        let first = repo.create(&customer("A", "1", "a@x.com")).await.unwrap();
        let second = repo.create(&customer("B", "2", "b@x.com")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let store = store().await;
        let repo = CustomerRepo::new(store.pool());
        let created = repo.create(&customer("A", "1", "a@x.com")).await.unwrap();

        let updated = repo
            .update(created.id, &customer("B", "2", "b@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(repo.get(created.id).await.unwrap(), updated);
        assert_eq!(updated.name, "B");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = store().await;
        let err = CustomerRepo::new(store.pool())
            .update(7, &customer("B", "2", "b@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 7, .. }));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = store().await;
        let repo = CustomerRepo::new(store.pool());
        let created = repo.create(&customer("A", "1", "a@x.com")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.get(created.id).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(created.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn schema_rejects_overlong_phone() {
        let store = store().await;
        let err = sqlx::query("INSERT INTO customers (name, phone, email) VALUES ('A', ?1, 'a@x.com')")
            .bind("1".repeat(16))
            .execute(store.pool())
            .await
            .map_err(DbError::from)
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }
}
