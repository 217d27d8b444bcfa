use std::net::SocketAddr;
use bookshelf::catalog::console::Console;
use bookshelf::catalog::controller::build_router;
use bookshelf::catalog::drivers::run_drivers;
use bookshelf::catalog::factory;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::core::library::{LibraryError, LibraryResult};
use bookshelf::utils::logging::setup_tracing;
use tracing::info;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> LibraryResult<()> {
    let config = if DEV_MODE {
        Configuration::new("dev")
    } else {
        Configuration::new("prod")
    };
    setup_tracing(&config);

    let catalog = factory::create_catalog_service(&config).await?;
    let addr: SocketAddr = config.http_addr.parse()
        .map_err(|err| LibraryError::bind_failure(format!("invalid address {}: {}", config.http_addr, err).as_str()))?;
    let app = build_router(AppState::new(catalog.clone()));

    // A taken port ends the process before the console starts.
    let server = axum::Server::try_bind(&addr)
        .map_err(|err| LibraryError::bind_failure(format!("failed to bind {}: {}", addr, err).as_str()))?
        .serve(app.into_make_service());
    info!("Starting API server on {}", addr);

    let server = async move {
        server.await
            .map_err(|err| LibraryError::runtime(format!("api server {}", err).as_str()))
    };

    let mut console = Console::stdio(catalog);
    run_drivers(server, console.run()).await
}
