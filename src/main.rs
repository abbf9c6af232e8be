use anyhow::{Context, Result};
use recipe_workspace::config::AppConfig;
use recipe_workspace::favorites::FileFavorites;
use recipe_workspace::recipes::{MealDbClient, ProviderPipeline};
use recipe_workspace::ui::{self, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_workspace=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting recipe workspace");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(
        "Using {} with favorites in {}",
        config.api_base_url,
        config.favorites_path.display()
    );

    let client = MealDbClient::from_config(&config)?;
    let pipeline = ProviderPipeline::new(Arc::new(client), config.thumbnail_size);
    let command_tx = pipeline.command_sender();
    let event_rx = pipeline.event_receiver();
    pipeline.start_worker()?;

    let favorites = FileFavorites::new(config.favorites_path.clone());
    let state = AppState::new(Arc::new(favorites)).with_provider(command_tx, event_rx);

    ui::run(&config, state).map_err(|e| anyhow::anyhow!("Window error: {}", e))
}
