use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{error, info, warn};

use pathfinder_api::{build_router, views::Views, AppState};
use pathfinder_core::repositories::LinkRepository;
use pathfinder_core::services::{AuthService, MenuService};
use pathfinder_infrastructure::{
    create_pool, run_migrations, FileMenuSource, PgLinkRepository, RemoteAuthClient,
};
use pathfinder_shared::config::{config_file, AppConfig};
use pathfinder_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_telemetry(&config.log);
    info!("Pathfinder starting...");

    // Link storage is only consulted when auth is enabled
    let link_repo: Option<Arc<dyn LinkRepository>> = match (&config.database, config.auth.enabled) {
        (Some(db), true) => {
            info!("Connecting to database...");
            let pool = create_pool(&db.url, db.max_connections)
                .await
                .context("connecting to database")?;
            run_migrations(&pool).await.context("running migrations")?;
            info!("Database connection established.");
            Some(Arc::new(PgLinkRepository::new(pool)))
        }
        (Some(_), false) => {
            warn!("Database configured but auth is disabled; menu comes from the config file");
            None
        }
        (None, _) => None,
    };

    // Menu items are re-read from the config file on every request
    let menu_source = FileMenuSource::from_config_name(&config_file());
    info!("Serving menu from {}", menu_source.path().display());
    let menu_service = MenuService::new(Arc::new(menu_source), link_repo);

    let auth_client = RemoteAuthClient::new(
        &config.auth.auth_server_url,
        Duration::from_secs(config.auth.timeout_secs),
    )?;
    let auth_service = AuthService::new(Arc::new(auth_client));

    let views = match Views::new() {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to load templates: {}", e);
            std::process::exit(1);
        }
    };

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));

    let state = AppState {
        config: Arc::new(config),
        menu_service: Arc::new(menu_service),
        auth_service: Arc::new(auth_service),
        views: Arc::new(views),
    };
    let app = build_router(state);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
