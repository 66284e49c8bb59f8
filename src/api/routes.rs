//! API route configuration.
//!
//! Everything here is nested under `/api/v1` by [`crate::routes::app_router`].
//!
//! | Class  | Paths        | Middleware                                  |
//! |--------|--------------|---------------------------------------------|
//! | Public | `/login`, `/register` | none                               |
//! | User   | `/user/*`    | Authenticator, then Authorizer(`user`)      |
//! | Admin  | `/admin/*`   | Authenticator, then Authorizer(`admin`)     |
//!
//! Layers added with `route_layer` wrap those added before them, so the
//! Authenticator is registered last to run first.

use crate::api::handlers::{
    carriage_list_handler, change_password_handler, create_carriage_handler,
    create_station_handler, create_train_handler, delete_carriage_handler, delete_station_handler,
    delete_train_handler, get_carriage_handler, get_station_handler, get_train_handler,
    login_handler, profile_handler, register_handler, set_role_handler, station_list_handler,
    train_list_handler, update_carriage_handler, update_profile_handler, update_station_handler,
    update_train_handler, user_list_handler,
};
use crate::api::middleware::{auth, role};
use crate::auth::Role;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

/// All `/api/v1` routes with their middleware attached.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(gated(user_routes(), Role::User, state.clone()))
        .merge(gated(admin_routes(), Role::Admin, state))
}

/// Wraps `routes` in Authenticator + Authorizer(`role`).
fn gated(routes: Router<AppState>, role: Role, state: AppState) -> Router<AppState> {
    routes
        .route_layer(middleware::from_fn_with_state(role, role::authorize))
        .route_layer(middleware::from_fn_with_state(state, auth::authenticate))
}

/// # Endpoints
///
/// - `POST /login`    - Exchange email and password for a credential
/// - `POST /register` - Create a `user` account
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/register", post(register_handler))
}

/// # Endpoints
///
/// - `GET  /user`          - Caller's profile
/// - `PUT  /user`          - Update name or email
/// - `PUT  /user/password` - Change password
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(profile_handler).put(update_profile_handler))
        .route("/user/password", put(change_password_handler))
}

/// # Endpoints
///
/// - `GET|POST /admin/stations`, `GET|PUT|DELETE /admin/stations/{id}`
/// - `GET|POST /admin/trains`, `GET|PUT|DELETE /admin/trains/{id}`
/// - `GET|POST /admin/train-carriages`, `GET|PUT|DELETE /admin/train-carriages/{id}`
/// - `GET /admin/users`, `PUT /admin/users/{id}/role`
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/stations",
            get(station_list_handler).post(create_station_handler),
        )
        .route(
            "/admin/stations/{id}",
            get(get_station_handler)
                .put(update_station_handler)
                .delete(delete_station_handler),
        )
        .route(
            "/admin/trains",
            get(train_list_handler).post(create_train_handler),
        )
        .route(
            "/admin/trains/{id}",
            get(get_train_handler)
                .put(update_train_handler)
                .delete(delete_train_handler),
        )
        .route(
            "/admin/train-carriages",
            get(carriage_list_handler).post(create_carriage_handler),
        )
        .route(
            "/admin/train-carriages/{id}",
            get(get_carriage_handler)
                .put(update_carriage_handler)
                .delete(delete_carriage_handler),
        )
        .route("/admin/users", get(user_list_handler))
        .route("/admin/users/{id}/role", put(set_role_handler))
}
