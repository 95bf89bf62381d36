use std::sync::Arc;

use tracing::info;
use vehicle_catalog::{
    build_app, config::Config, logging, repository::VehicleMapRepository,
    service::VehicleDefault, AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let repository = VehicleMapRepository::from_json_file(&config.vehicles_path).await?;
    info!(
        path = %config.vehicles_path.display(),
        vehicles = repository.len(),
        "vehicles loaded"
    );

    let service = Arc::new(VehicleDefault::new(Arc::new(repository)));
    let bind_socket = config.bind_socket()?;
    let app = build_app(AppState::new(service));
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
