use std::sync::Arc;

use axum::{middleware, routing::get, Router};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod repository;
pub mod service;

use service::VehicleService;

#[derive(Clone)]
pub struct AppState {
    pub vehicle_service: Arc<dyn VehicleService>,
}

impl AppState {
    pub fn new(vehicle_service: Arc<dyn VehicleService>) -> Self {
        Self { vehicle_service }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::health))
        .route("/vehicles", get(http::handlers::get_all))
        .route(
            "/vehicles/transmission/{type}",
            get(http::handlers::get_by_transmission_type),
        )
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
