pub mod info;
pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use tracing::debug;

use crate::{
    config::{APP_NAME, APP_VERSION},
    models::{status::HEALTHY, HealthStatus, WelcomeMessage},
    AppState,
};

pub async fn root(State(state): State<AppState>) -> (StatusCode, Json<WelcomeMessage>) {
    (
        StatusCode::OK,
        Json(WelcomeMessage {
            message: format!("Welcome to {APP_NAME}"),
            timestamp: state.clock.now(),
            environment: state.config.environment.clone(),
        }),
    )
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    debug!("Health probe");
    (
        StatusCode::OK,
        Json(HealthStatus {
            status: HEALTHY,
            timestamp: state.clock.now(),
            version: APP_VERSION.map(str::to_string),
            environment: state.config.environment.clone(),
        }),
    )
}
