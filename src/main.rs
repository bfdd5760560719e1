use arbitrage_dashboard::config::{CalculatorConfig, ServerConfig};
use arbitrage_dashboard::routes;
use dotenv::dotenv;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let server = ServerConfig::from_env()?;
    info!("Using PORT: {}", server.port);
    let config = Arc::new(CalculatorConfig::from_env());

    // Bind to 0.0.0.0 so the platform router can reach us
    let addr: SocketAddr = ([0, 0, 0, 0], server.port).into();
    info!("Will bind to: {}", addr);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    // Set up routes
    let api = routes::routes(config).with(cors);
    info!("Routes configured successfully with CORS.");

    // Start the server
    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;
    Ok(())
}
