//! Reservation repository
//!
//! No application-level check that `customer_id` exists: a dangling
//! reference comes back from the store as a foreign-key violation.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewReservation;

const RESOURCE: &str = "Reservation";

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ReservationRow {
    pub id: i64,
    pub customer_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, reservation: &NewReservation) -> Result<ReservationRow, DbError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            INSERT INTO reservations (customer_id, date, time)
            VALUES (?1, ?2, ?3)
            RETURNING id, customer_id, date, time
            "#,
        )
        .bind(reservation.customer_id)
        .bind(reservation.date)
        .bind(reservation.time)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<ReservationRow, DbError> {
        sqlx::query_as::<_, ReservationRow>(
            "SELECT id, customer_id, date, time FROM reservations WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    pub async fn list(&self) -> Result<Vec<ReservationRow>, DbError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT id, customer_id, date, time FROM reservations ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(
        &self,
        id: i64,
        reservation: &NewReservation,
    ) -> Result<ReservationRow, DbError> {
        sqlx::query_as::<_, ReservationRow>(
            r#"
            UPDATE reservations
            SET customer_id = ?1, date = ?2, time = ?3
            WHERE id = ?4
            RETURNING id, customer_id, date, time
            "#,
        )
        .bind(reservation.customer_id)
        .bind(reservation.date)
        .bind(reservation.time)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?1")
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
