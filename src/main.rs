mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, scheduler::maintenance, service::setup::SetupTokenService,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (session_store, session_layer) = startup::connect_to_session(&db).await?;

    let setup_tokens = SetupTokenService::new();
    startup::check_for_setup(&db, &config, &setup_tokens).await?;

    tracing::info!("Starting server");

    // Start the maintenance scheduler in a separate task
    let scheduler_db = db.clone();
    let scheduler_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = maintenance::start_scheduler(scheduler_db, scheduler_store).await {
            tracing::error!("Maintenance scheduler error: {}", e);
        }
    });

    let state = AppState::new(db, setup_tokens, config.route_exclusions.clone());
    let app = server::router::router(state, session_layer);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
