//! PostgreSQL implementation of the station repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewStation, Station};
use crate::domain::repositories::StationRepository;
use crate::error::AppError;

/// PostgreSQL repository for stations.
pub struct PgStationRepository {
    pool: Arc<PgPool>,
}

impl PgStationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StationRow {
    id: i64,
    code: String,
    name: String,
    city: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StationRow> for Station {
    fn from(r: StationRow) -> Self {
        Station {
            id: r.id,
            code: r.code,
            name: r.name,
            city: r.city,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl StationRepository for PgStationRepository {
    async fn create(&self, station: NewStation) -> Result<Station, AppError> {
        let row: StationRow = sqlx::query_as(
            r#"
            INSERT INTO stations (code, name, city)
            VALUES ($1, $2, $3)
            RETURNING id, code, name, city, created_at, updated_at
            "#,
        )
        .bind(station.code)
        .bind(station.name)
        .bind(station.city)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, AppError> {
        let row: Option<StationRow> = sqlx::query_as(
            "SELECT id, code, name, city, created_at, updated_at FROM stations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Station>, AppError> {
        let rows: Vec<StationRow> = sqlx::query_as(
            "SELECT id, code, name, city, created_at, updated_at FROM stations ORDER BY code",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, station: NewStation) -> Result<Station, AppError> {
        let row: Option<StationRow> = sqlx::query_as(
            r#"
            UPDATE stations SET
                code       = $2,
                name       = $3,
                city       = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, code, name, city, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(station.code)
        .bind(station.name)
        .bind(station.city)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("station not found"))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("station not found"));
        }

        Ok(())
    }
}
