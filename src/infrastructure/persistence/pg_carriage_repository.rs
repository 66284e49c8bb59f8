//! PostgreSQL implementation of the carriage repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTrainCarriage, TrainCarriage};
use crate::domain::repositories::CarriageRepository;
use crate::error::AppError;

/// PostgreSQL repository for train carriages.
///
/// `(train_id, carriage_number)` is unique; `train_id` references `trains`
/// with `ON DELETE RESTRICT`.
pub struct PgCarriageRepository {
    pool: Arc<PgPool>,
}

impl PgCarriageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CarriageRow {
    id: i64,
    train_id: i64,
    carriage_number: i32,
    seat_capacity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CarriageRow> for TrainCarriage {
    fn from(r: CarriageRow) -> Self {
        TrainCarriage {
            id: r.id,
            train_id: r.train_id,
            carriage_number: r.carriage_number,
            seat_capacity: r.seat_capacity,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl CarriageRepository for PgCarriageRepository {
    async fn create(&self, carriage: NewTrainCarriage) -> Result<TrainCarriage, AppError> {
        let row: CarriageRow = sqlx::query_as(
            r#"
            INSERT INTO train_carriages (train_id, carriage_number, seat_capacity)
            VALUES ($1, $2, $3)
            RETURNING id, train_id, carriage_number, seat_capacity, created_at, updated_at
            "#,
        )
        .bind(carriage.train_id)
        .bind(carriage.carriage_number)
        .bind(carriage.seat_capacity)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TrainCarriage>, AppError> {
        let row: Option<CarriageRow> = sqlx::query_as(
            r#"
            SELECT id, train_id, carriage_number, seat_capacity, created_at, updated_at
            FROM train_carriages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, train_id: Option<i64>) -> Result<Vec<TrainCarriage>, AppError> {
        let rows: Vec<CarriageRow> = sqlx::query_as(
            r#"
            SELECT id, train_id, carriage_number, seat_capacity, created_at, updated_at
            FROM train_carriages
            WHERE ($1::BIGINT IS NULL OR train_id = $1)
            ORDER BY train_id, carriage_number
            "#,
        )
        .bind(train_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i64,
        carriage: NewTrainCarriage,
    ) -> Result<TrainCarriage, AppError> {
        let row: Option<CarriageRow> = sqlx::query_as(
            r#"
            UPDATE train_carriages SET
                train_id        = $2,
                carriage_number = $3,
                seat_capacity   = $4,
                updated_at      = NOW()
            WHERE id = $1
            RETURNING id, train_id, carriage_number, seat_capacity, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(carriage.train_id)
        .bind(carriage.carriage_number)
        .bind(carriage.seat_capacity)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("carriage not found"))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM train_carriages WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("carriage not found"));
        }

        Ok(())
    }
}
