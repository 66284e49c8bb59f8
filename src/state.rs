//! Shared application state injected into every handler and middleware.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CarriageService, StationService, TrainService, UserService,
};
use crate::auth::TokenCodec;
use crate::domain::repositories::{
    CarriageRepository, HealthCheck, StationRepository, TrainRepository, UserRepository,
};

/// Storage backends the services are built on.
///
/// The server wires the `Pg*` implementations; tests substitute in-memory
/// fakes.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub stations: Arc<dyn StationRepository>,
    pub trains: Arc<dyn TrainRepository>,
    pub carriages: Arc<dyn CarriageRepository>,
    pub health: Arc<dyn HealthCheck>,
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub station_service: Arc<StationService<dyn StationRepository>>,
    pub train_service: Arc<TrainService<dyn TrainRepository>>,
    pub carriage_service: Arc<CarriageService<dyn CarriageRepository, dyn TrainRepository>>,
    /// Verifies credentials in the Authenticator.
    pub token_codec: Arc<TokenCodec>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Builds every service from the given repositories.
    ///
    /// # Arguments
    ///
    /// - `repos` - storage backends
    /// - `token_codec` - codec keyed by the signing secret, shared by login and the Authenticator
    /// - `bcrypt_cost` - work factor for new password hashes
    pub fn new(repos: Repositories, token_codec: Arc<TokenCodec>, bcrypt_cost: u32) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                repos.users.clone(),
                token_codec.clone(),
                bcrypt_cost,
            )),
            user_service: Arc::new(UserService::new(repos.users, bcrypt_cost)),
            station_service: Arc::new(StationService::new(repos.stations)),
            train_service: Arc::new(TrainService::new(repos.trains.clone())),
            carriage_service: Arc::new(CarriageService::new(repos.carriages, repos.trains)),
            token_codec,
            health: repos.health,
        }
    }
}
