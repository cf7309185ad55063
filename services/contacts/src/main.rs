use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod flash;
mod models;
mod repositories;
mod routes;
mod settings;
mod state;
mod templates;
mod validation;

use common::database::{self, DatabaseConfig};
use tokio::net::TcpListener;

use crate::repositories::UserRepository;
use crate::settings::Settings;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting contacts service");

    let settings = Settings::load()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::new(settings.database.url(), settings.database.max_connections);
    let pool = database::init_pool(&db_config).await?;

    database::run_migrations(&pool, &sqlx::migrate!("./migrations")).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    info!("Contacts service initialized successfully");

    let user_repository = UserRepository::new(pool);
    let app_state = AppState { user_repository };

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = settings.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Contacts service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
