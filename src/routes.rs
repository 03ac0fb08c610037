use std::any::Any;

use axum::{
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::{error, handlers, AppState};

/// One row of the route table.
pub struct RouteEntry {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

impl RouteEntry {
    fn get<H, T>(name: &'static str, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            name,
            method: Method::GET,
            path,
            handler: routing::get(handler),
        }
    }
}

/// Every endpoint the service exposes, in registration order.
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry::get("GetRoot", "/", handlers::root),
        RouteEntry::get("HealthCheck", "/health", handlers::health),
        RouteEntry::get("GetProducts", "/api/products", handlers::products::list_products),
        RouteEntry::get("GetApplicationInfo", "/api/info", handlers::info::application_info),
    ]
}

pub fn build_router(state: AppState) -> Router {
    let detailed_errors = state.config.is_development();

    let router = route_table()
        .into_iter()
        .fold(Router::new(), |router, entry| {
            debug!(route = entry.name, method = %entry.method, path = entry.path, "Registered route");
            router.route(entry.path, entry.handler)
        });

    router
        .fallback(error::not_found)
        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| {
                error::panic_response(panic, detailed_errors)
            },
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
