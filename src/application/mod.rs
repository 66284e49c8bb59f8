//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! password hashing, credential issuance and business rules. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration and login
//! - [`services::user_service::UserService`] - Profiles, passwords and roles
//! - [`services::station_service::StationService`] - Station management
//! - [`services::train_service::TrainService`] - Train management
//! - [`services::carriage_service::CarriageService`] - Carriage management

pub mod services;
