//! Business logic services for the application layer.

pub mod auth_service;
pub mod carriage_service;
pub mod station_service;
pub mod train_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use carriage_service::CarriageService;
pub use station_service::StationService;
pub use train_service::TrainService;
pub use user_service::UserService;
