use eyre::{Result, eyre};
use http::Method;
use salvo::cors::Cors;
use salvo::prelude::*;
use tracing::info;

use reel_api::config::ServerConfig;
use reel_api::graphql::create_schema;
use reel_api::routes::create_router;
use reel_api::state::{AppServices, AppState};
use reel_auth::utils::service::AuthError;
use reel_migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    reel_api::logging::init_tracing();

    info!("Starting reel-api...");

    let config = ServerConfig::load_and_validate().map_err(|e| eyre!(e))?;

    info!("Connecting to database at {}", config.database_url);
    let db = sea_orm::Database::connect(&config.database_url)
        .await
        .map_err(|e| eyre!("Failed to connect to database: {}", e))?;
    info!("Connected to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(|e| eyre!("Failed to apply migrations: {}", e))?;
        info!("Migrations applied");
    }

    let services = AppServices::new(&config, db);

    if let Some((username, password)) = config.bootstrap_credentials() {
        match services.auth.create_user(username, password).await {
            Ok(_) | Err(AuthError::UserAlreadyExists) => {
                info!("Bootstrap user {} is present", username)
            }
            Err(e) => return Err(eyre!("Failed to create bootstrap user: {}", e)),
        }
    }

    let bind_address = config.bind_address.clone();
    let state = AppState::new(config, services);
    let schema = create_schema(state.clone());

    let cors = Cors::new()
        .allow_origin(salvo::cors::AllowOrigin::mirror_request())
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec!["authorization", "content-type", "accept"])
        .allow_credentials(true)
        .max_age(3600)
        .into_handler();

    let service = Service::new(create_router(state, schema)).hoop(cors);

    info!("Binding to address: {}", bind_address);
    let acceptor = TcpListener::new(bind_address.clone()).bind().await;

    info!("Server listening on {}", bind_address);

    Server::new(acceptor).serve(service).await;

    Ok(())
}
