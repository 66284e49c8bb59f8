//! PostgreSQL implementation of the train repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTrain, Train, TrainClass};
use crate::domain::repositories::TrainRepository;
use crate::error::AppError;

/// PostgreSQL repository for trains.
///
/// `class` is stored as text constrained by a `CHECK` to the known classes.
pub struct PgTrainRepository {
    pool: Arc<PgPool>,
}

impl PgTrainRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TrainRow {
    id: i64,
    code: String,
    name: String,
    class: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TrainRow> for Train {
    type Error = AppError;

    fn try_from(r: TrainRow) -> Result<Self, Self::Error> {
        let class = r
            .class
            .parse::<TrainClass>()
            .map_err(|e| AppError::internal(format!("train {}: {e}", r.id)))?;

        Ok(Train {
            id: r.id,
            code: r.code,
            name: r.name,
            class,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[async_trait]
impl TrainRepository for PgTrainRepository {
    async fn create(&self, train: NewTrain) -> Result<Train, AppError> {
        let row: TrainRow = sqlx::query_as(
            r#"
            INSERT INTO trains (code, name, class)
            VALUES ($1, $2, $3)
            RETURNING id, code, name, class, created_at, updated_at
            "#,
        )
        .bind(train.code)
        .bind(train.name)
        .bind(train.class.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Train>, AppError> {
        let row: Option<TrainRow> = sqlx::query_as(
            "SELECT id, code, name, class, created_at, updated_at FROM trains WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Train::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Train>, AppError> {
        let rows: Vec<TrainRow> = sqlx::query_as(
            "SELECT id, code, name, class, created_at, updated_at FROM trains ORDER BY code",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Train::try_from).collect()
    }

    async fn update(&self, id: i64, train: NewTrain) -> Result<Train, AppError> {
        let row: Option<TrainRow> = sqlx::query_as(
            r#"
            UPDATE trains SET
                code       = $2,
                name       = $3,
                class      = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, code, name, class, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(train.code)
        .bind(train.name)
        .bind(train.class.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("train not found"))?
            .try_into()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trains WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("train not found"));
        }

        Ok(())
    }

    async fn count_carriages(&self, train_id: i64) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM train_carriages WHERE train_id = $1")
                .bind(train_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
