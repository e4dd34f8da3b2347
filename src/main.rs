/**
 * rezolvd Server Entry Point
 *
 * Loads configuration, connects to the database, runs migrations, and
 * owns the server lifecycle: start, wait for ctrl-c, stop gracefully.
 */

use rezolvd::server::{AppState, Config, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env()?;

    tracing::info!("connecting to database...");
    let pool = sqlx::PgPool::connect(&config.database_url).await?;

    tracing::info!("running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    let state = AppState::new(&config, pool);
    let server = Server::start(&config, state).await?;
    tracing::info!("your app is listening on {}", server.local_addr());

    tokio::signal::ctrl_c().await?;
    server.stop().await?;

    Ok(())
}
