use std::sync::Arc;

use medquery_core::{JsonCollection, MedicineService, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the MedQuery lookup server
///
/// Loads the medicine collection once, then serves the REST API with OpenAPI/Swagger
/// documentation until the process stops. The collection handle lives for the whole
/// process and is shared by every request.
///
/// # Environment Variables
/// - `HOST`: bind host (default: "0.0.0.0")
/// - `PORT`: bind port (default: 5000)
/// - `MEDQUERY_DATA_PATH`: JSON export of the medicine collection (default: "data/medicines.json")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the collection cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medquery_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("medquery_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env_values(
        std::env::var("HOST").ok(),
        std::env::var("PORT").ok(),
        std::env::var("MEDQUERY_DATA_PATH").ok(),
    )?;

    let data_path = cfg.data_path();
    if !data_path.is_file() {
        anyhow::bail!("Medicine data file does not exist: {}", data_path.display());
    }

    let collection = JsonCollection::from_path(data_path)?;
    tracing::info!(
        "++ Loaded {} medicines from {}",
        collection.len(),
        data_path.display()
    );

    let medicines = MedicineService::new(Arc::new(collection));

    tracing::info!("++ Starting MedQuery REST on {}", cfg.bind_addr());
    api_rest::serve(&cfg.bind_addr(), medicines).await
}
