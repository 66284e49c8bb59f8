#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum_test::TestServer;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use train_booking::auth::password::{MIN_COST, hash_password};
use train_booking::auth::{Role, TokenCodec};
use train_booking::domain::entities::{
    NewStation, NewTrain, NewTrainCarriage, NewUser, Station, Train, TrainCarriage, UpdateUser,
    User,
};
use train_booking::domain::repositories::{
    CarriageRepository, HealthCheck, StationRepository, TrainRepository, UserRepository,
};
use train_booking::error::AppError;
use train_booking::state::{AppState, Repositories};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "password123";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    stations: Vec<Station>,
    trains: Vec<Train>,
    carriages: Vec<TrainCarriage>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory stand-in for PostgreSQL with the same uniqueness rules as
/// the schema.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    healthy: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tables: Mutex::new(Tables::default()),
            healthy: AtomicBool::new(true),
        })
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict("resource already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: t.next_id(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: now,
            updated_at: now,
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.lock().unwrap().users.clone())
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<User, AppError> {
        let mut t = self.tables.lock().unwrap();
        if let Some(email) = &update.email
            && t.users.iter().any(|u| u.id != id && &u.email == email)
        {
            return Err(AppError::conflict("resource already exists"));
        }

        let user = t
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("user not found"))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        let user = t
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("user not found"))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn set_role(&self, id: i64, role: Role) -> Result<User, AppError> {
        let mut t = self.tables.lock().unwrap();
        let user = t
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("user not found"))?;
        user.role = role;
        Ok(user.clone())
    }
}

#[async_trait]
impl StationRepository for MemoryStore {
    async fn create(&self, station: NewStation) -> Result<Station, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.stations.iter().any(|s| s.code == station.code) {
            return Err(AppError::conflict("resource already exists"));
        }

        let now = Utc::now();
        let station = Station {
            id: t.next_id(),
            code: station.code,
            name: station.name,
            city: station.city,
            created_at: now,
            updated_at: now,
        };
        t.stations.push(station.clone());
        Ok(station)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.stations.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Station>, AppError> {
        let mut stations = self.tables.lock().unwrap().stations.clone();
        stations.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(stations)
    }

    async fn update(&self, id: i64, station: NewStation) -> Result<Station, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.stations.iter().any(|s| s.id != id && s.code == station.code) {
            return Err(AppError::conflict("resource already exists"));
        }

        let existing = t
            .stations
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("station not found"))?;
        existing.code = station.code;
        existing.name = station.name;
        existing.city = station.city;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.stations.len();
        t.stations.retain(|s| s.id != id);
        if t.stations.len() == before {
            return Err(AppError::not_found("station not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl TrainRepository for MemoryStore {
    async fn create(&self, train: NewTrain) -> Result<Train, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.trains.iter().any(|tr| tr.code == train.code) {
            return Err(AppError::conflict("resource already exists"));
        }

        let now = Utc::now();
        let train = Train {
            id: t.next_id(),
            code: train.code,
            name: train.name,
            class: train.class,
            created_at: now,
            updated_at: now,
        };
        t.trains.push(train.clone());
        Ok(train)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Train>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.trains.iter().find(|tr| tr.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Train>, AppError> {
        let mut trains = self.tables.lock().unwrap().trains.clone();
        trains.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(trains)
    }

    async fn update(&self, id: i64, train: NewTrain) -> Result<Train, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.trains.iter().any(|tr| tr.id != id && tr.code == train.code) {
            return Err(AppError::conflict("resource already exists"));
        }

        let existing = t
            .trains
            .iter_mut()
            .find(|tr| tr.id == id)
            .ok_or_else(|| AppError::not_found("train not found"))?;
        existing.code = train.code;
        existing.name = train.name;
        existing.class = train.class;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.trains.len();
        t.trains.retain(|tr| tr.id != id);
        if t.trains.len() == before {
            return Err(AppError::not_found("train not found"));
        }
        Ok(())
    }

    async fn count_carriages(&self, train_id: i64) -> Result<i64, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.carriages.iter().filter(|c| c.train_id == train_id).count() as i64)
    }
}

#[async_trait]
impl CarriageRepository for MemoryStore {
    async fn create(&self, carriage: NewTrainCarriage) -> Result<TrainCarriage, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.carriages.iter().any(|c| {
            c.train_id == carriage.train_id && c.carriage_number == carriage.carriage_number
        }) {
            return Err(AppError::conflict("resource already exists"));
        }

        let now = Utc::now();
        let carriage = TrainCarriage {
            id: t.next_id(),
            train_id: carriage.train_id,
            carriage_number: carriage.carriage_number,
            seat_capacity: carriage.seat_capacity,
            created_at: now,
            updated_at: now,
        };
        t.carriages.push(carriage.clone());
        Ok(carriage)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TrainCarriage>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.carriages.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, train_id: Option<i64>) -> Result<Vec<TrainCarriage>, AppError> {
        let t = self.tables.lock().unwrap();
        let mut carriages: Vec<_> = t
            .carriages
            .iter()
            .filter(|c| train_id.is_none_or(|id| c.train_id == id))
            .cloned()
            .collect();
        carriages.sort_by_key(|c| (c.train_id, c.carriage_number));
        Ok(carriages)
    }

    async fn update(
        &self,
        id: i64,
        carriage: NewTrainCarriage,
    ) -> Result<TrainCarriage, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.carriages.iter().any(|c| {
            c.id != id
                && c.train_id == carriage.train_id
                && c.carriage_number == carriage.carriage_number
        }) {
            return Err(AppError::conflict("resource already exists"));
        }

        let existing = t
            .carriages
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("carriage not found"))?;
        existing.train_id = carriage.train_id;
        existing.carriage_number = carriage.carriage_number;
        existing.seat_capacity = carriage.seat_capacity;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.carriages.len();
        t.carriages.retain(|c| c.id != id);
        if t.carriages.len() == before {
            return Err(AppError::not_found("carriage not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        if self.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::internal("store offline"))
        }
    }
}

pub fn codec() -> Arc<TokenCodec> {
    Arc::new(TokenCodec::new(TEST_SECRET).unwrap())
}

pub fn test_state(store: &Arc<MemoryStore>) -> AppState {
    let repos = Repositories {
        users: store.clone(),
        stations: store.clone(),
        trains: store.clone(),
        carriages: store.clone(),
        health: store.clone(),
    };

    AppState::new(repos, codec(), MIN_COST)
}

pub fn test_server(store: &Arc<MemoryStore>) -> TestServer {
    TestServer::new(train_booking::routes::router(test_state(store))).unwrap()
}

/// Inserts an account with [`TEST_PASSWORD`] directly into the store.
pub async fn seed_user(store: &Arc<MemoryStore>, email: &str, role: Role) -> User {
    let password_hash = hash_password(TEST_PASSWORD, MIN_COST).await.unwrap();

    UserRepository::create(
        store.as_ref(),
        NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash,
            role,
        },
    )
    .await
    .unwrap()
}

pub fn token_for(user_id: i64, role: Role) -> String {
    codec().mint(user_id as u64, role).unwrap()
}

/// `Authorization` header with an arbitrary raw value.
pub fn auth_header(value: &str) -> (HeaderName, HeaderValue) {
    (AUTHORIZATION, HeaderValue::from_str(value).unwrap())
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    auth_header(&format!("Bearer {token}"))
}

pub async fn admin_token(store: &Arc<MemoryStore>) -> String {
    let admin = seed_user(store, "admin@example.com", Role::Admin).await;
    token_for(admin.id, Role::Admin)
}
