//! HTTP API definitions.

pub mod auth;
pub mod check_ins;
pub mod macros;
pub mod workouts;

use axum::{
    routing::{get, post, put},
    Router,
};

/// Builds the [`Router`] of the HTTP API.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/password", put(auth::update_password))
        .route("/api/workouts", post(workouts::create).get(workouts::list))
        .route(
            "/api/workouts/:id",
            get(workouts::find)
                .put(workouts::update)
                .delete(workouts::delete),
        )
        .route("/api/macros", put(macros::set).get(macros::find))
        .route(
            "/api/check-ins",
            post(check_ins::create).get(check_ins::list),
        )
        .route("/api/check-ins/:id", get(check_ins::find))
        .route("/api/check-ins/:id/review", post(check_ins::review))
}
