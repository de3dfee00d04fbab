//! Contacts MCP Server - Main entry point
//!
//! Loads the contact collection from disk and serves it over the Model
//! Context Protocol on stdio.

use anyhow::Result;
use contacts_mcp_server::repositories::{ContactStorage, JsonFileStorage};
use contacts_mcp_server::services::{ContactService, ContactStore};
use contacts_mcp_server::{Config, ContactsMcpServer, Validator};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting Contacts MCP Server");

    let storage = JsonFileStorage::new(&config.db_path);
    info!("Using contact file {}", storage.path().display());
    let storage = Arc::new(storage) as Arc<dyn ContactStorage>;
    let validator = Validator::with_allowed_tlds(&config.allowed_tlds);

    let store = match ContactStore::open(storage, validator).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open contact collection: {}", e);
            return Err(e.into());
        }
    };
    let contact_service = Arc::new(store) as Arc<dyn ContactService>;

    let server = ContactsMcpServer::new(contact_service);
    info!("Allowed email TLDs: {}", config.allowed_tlds.join(", "));

    info!("Starting MCP server with stdio transport");
    contacts_mcp_server::server::run_server(server).await?;

    info!("Contacts MCP Server shutdown complete");
    Ok(())
}
