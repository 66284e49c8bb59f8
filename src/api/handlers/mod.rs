//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin_users;
pub mod auth;
pub mod carriages;
pub mod health;
pub mod stations;
pub mod trains;
pub mod user;

pub use admin_users::{set_role_handler, user_list_handler};
pub use auth::{login_handler, register_handler};
pub use carriages::{
    carriage_list_handler, create_carriage_handler, delete_carriage_handler,
    get_carriage_handler, update_carriage_handler,
};
pub use health::health_handler;
pub use stations::{
    create_station_handler, delete_station_handler, get_station_handler, station_list_handler,
    update_station_handler,
};
pub use trains::{
    create_train_handler, delete_train_handler, get_train_handler, train_list_handler,
    update_train_handler,
};
pub use user::{change_password_handler, profile_handler, update_profile_handler};
