use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    config::{APP_NAME, APP_VERSION},
    models::ApplicationInfo,
    AppState,
};

pub async fn application_info(State(state): State<AppState>) -> (StatusCode, Json<ApplicationInfo>) {
    let runtime = &state.runtime;
    let body = ApplicationInfo {
        application_name: APP_NAME.to_string(),
        version: APP_VERSION.map(str::to_string),
        environment: state.config.environment.clone(),
        machine_name: runtime.machine_name(),
        os_version: runtime.os_version(),
        processor_count: runtime.processor_count(),
        working_set: runtime.working_set(),
        timestamp: state.clock.now(),
    };

    info!(
        processor_count = body.processor_count,
        working_set = body.working_set,
        "Reported application info"
    );

    (StatusCode::OK, Json(body))
}
