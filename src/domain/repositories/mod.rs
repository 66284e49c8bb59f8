//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Accounts and roles
//! - [`StationRepository`] - Station CRUD
//! - [`TrainRepository`] - Train CRUD
//! - [`CarriageRepository`] - Train carriage CRUD
//! - [`HealthCheck`] - Storage liveness probe
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod carriage_repository;
pub mod health_check;
pub mod station_repository;
pub mod train_repository;
pub mod user_repository;

pub use carriage_repository::CarriageRepository;
pub use health_check::HealthCheck;
pub use station_repository::StationRepository;
pub use train_repository::TrainRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use carriage_repository::MockCarriageRepository;
#[cfg(test)]
pub use health_check::MockHealthCheck;
#[cfg(test)]
pub use station_repository::MockStationRepository;
#[cfg(test)]
pub use train_repository::MockTrainRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
