use std::net::TcpListener;

use scorebridge_backend::config::settings::get_config;
use scorebridge_backend::run;
use scorebridge_backend::storage::AppStores;
use scorebridge_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "scorebridge-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // Entity stores are external collaborators; the bundled in-memory backend
    // keeps the service self-contained when no other backend is wired in.
    let stores = AppStores::in_memory();

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("🚀 Listening on {}", address);

    run(listener, stores)?.await
}
