mod config;
mod routes;

use config::{ConfigError, ServerConfig};

/// Fatal startup or serve failure.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    // A missing .env file is normal in production.
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    let app = routes::app().map_err(ServerError::Leptos)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "finoxa console listening");
    axum::serve(listener, app).await?;
    Ok(())
}
