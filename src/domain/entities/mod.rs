//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - An account that can sign in and hold a [`crate::auth::Role`]
//! - [`Station`] - A railway station
//! - [`Train`] - A train with a service class
//! - [`TrainCarriage`] - A carriage attached to a train
//!
//! Entities follow the "New Type" pattern with separate structs for writes
//! (`NewUser`, `NewStation`, `NewTrain`, `NewTrainCarriage`).

pub mod carriage;
pub mod station;
pub mod train;
pub mod user;

pub use carriage::{NewTrainCarriage, TrainCarriage};
pub use station::{NewStation, Station};
pub use train::{NewTrain, Train, TrainClass};
pub use user::{NewUser, UpdateUser, User};
