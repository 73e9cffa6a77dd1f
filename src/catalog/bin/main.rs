include!("../../lib.rs");
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use crate::catalog::console::Console;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;
use crate::gateway::GatewayPublisherVia;
use crate::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);
    info!("starting library console for branch {}", config.branch_id);

    let catalog_svc = create_catalog_service(&config, GatewayPublisherVia::Logs);
    let mut console = Console::new(catalog_svc, BufReader::new(stdin()), stdout());
    console.run().await
}
