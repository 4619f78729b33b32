use std::process::ExitCode;

use product_api::config::EnvConfig;
use product_api::lifecycle::Lifecycle;
use product_api::state::AppState;
use product_api::types::error::ServerError;

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => {
            tracing::info!("Server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Server exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = EnvConfig::from_env()?;
    tracing::info!(
        address = %config.web.address(),
        db_driver = ?config.db.driver,
        token_lifetime_secs = config.jwt.expires_in,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config).await?;

    Lifecycle::new(&config.web, state).run().await
}
