use std::sync::Arc;

use add_drop_form::config::FormConfig;
use add_drop_form::editor::SystemClock;
use add_drop_form::frontend;
use add_drop_form::services::FormController;
use add_drop_form::submission::client_from_config;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "add_drop_form=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = FormConfig::new_from_env()?;
    let catalog = config.load_catalog()?;
    let client = client_from_config(&config)?;
    info!(
        "loaded {} advisors; submissions time out after {:?}",
        catalog.len(),
        config.request_timeout
    );

    let mut controller = FormController::new(
        catalog,
        client,
        Arc::new(SystemClock),
        config.request_timeout,
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    frontend::run(&mut controller, stdin, &mut stdout).await?;

    Ok(())
}
