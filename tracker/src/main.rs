mod catalog;
mod config;
mod search_service;
mod web;

use anyhow::Result;
use catalog::Catalog;
use config::Config;
use groupie::GroupieClient;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::web::WebState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env();
    info!("starting with {config:?}");
    let client = GroupieClient::new(&config.api_url, "groupie-tracker")?;
    // the home page refreshes the catalog, so a failed first load is not fatal
    let catalog = Catalog::fetch(&client).await.unwrap_or_else(|e| {
        warn!("unable to load artists at startup: {e}");
        Catalog::default()
    });
    let web_state = WebState {
        catalog: Arc::new(RwLock::new(catalog)),
        client,
        config: Arc::new(config),
    };
    web::start_web(web_state).await
}
