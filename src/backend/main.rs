/**
 * Z-Code Server Entry Point
 *
 * This is the main entry point for the Z-Code backend server. It loads the
 * configuration, installs tracing and serves the Axum app.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use zcode::backend::server::{config::ServerConfig, init::create_app};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = ServerConfig::load()?;

    // RUST_LOG wins over the configured filter
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Log filter: {}", env_filter);

    let addr = config.bind_addr;
    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin zcode-server --features ssr");
    std::process::exit(1);
}
