//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Accounts, password hashes and roles
//! - [`PgStationRepository`] - Stations
//! - [`PgTrainRepository`] - Trains
//! - [`PgCarriageRepository`] - Train carriages
//! - [`PgHealthCheck`] - `SELECT 1` liveness probe

pub mod pg_carriage_repository;
pub mod pg_health_check;
pub mod pg_station_repository;
pub mod pg_train_repository;
pub mod pg_user_repository;

pub use pg_carriage_repository::PgCarriageRepository;
pub use pg_health_check::PgHealthCheck;
pub use pg_station_repository::PgStationRepository;
pub use pg_train_repository::PgTrainRepository;
pub use pg_user_repository::PgUserRepository;
