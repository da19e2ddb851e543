use std::process::ExitCode;
use chrono::Local;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;
mod utils;

use api::WalletApiClient;
use config::AppConfig;
use utils::Page;
use utils::page::{BALANCE_REGION, HISTORY_REGION, TRANSACTIONS_REGION};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wallet_view=info,reqwest=warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = WalletApiClient::new(&config.api_url);
    info!("Rendering wallet view from {}", client.base_url());
    let mut page = Page::new();

    let outcome = services::render_wallet(&client, &mut page, &Local).await;
    debug!(
        "Render outcomes: balance={:?} transactions={:?} history={:?}",
        outcome.balance, outcome.transactions, outcome.history
    );
    for key in [BALANCE_REGION, TRANSACTIONS_REGION, HISTORY_REGION] {
        if let Some(region) = page.region(key) {
            debug!("#{} holds {} node(s)", key, region.children().len());
        }
    }

    let html = page.render();
    match &config.output_path {
        Some(path) => {
            if let Err(e) = tokio::fs::write(path, html).await {
                error!("Failed to write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            info!("Wrote wallet page to {}", path.display());
        }
        None => print!("{}", html),
    }

    ExitCode::SUCCESS
}
