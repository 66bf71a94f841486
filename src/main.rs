use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use customer_address::seed::SeedData;
use customer_address::{AppConfig, AppState, GeoService, logging, web};

#[derive(Parser, Debug)]
#[command(name = "address-server")]
#[command(about = "Customer address API server", version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overrides the configured one
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON seed file, overrides the configured one
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_from_path(args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(seed) = args.seed {
        config.data.seed_file = Some(seed);
    }
    config.validate()?;

    logging::init(&config.logging)?;
    info!("Customer address service v{}", customer_address::VERSION);

    let seed = SeedData::load(config.data.seed_file.as_deref())?;
    let places = seed.place_directory();
    let (cities, regions, districts) = places.counts();
    info!(
        "Place directory ready: {} cities, {} regions, {} districts",
        cities, regions, districts
    );

    let state = Arc::new(AppState {
        customers: Arc::new(seed.customer_service(config.addresses.max_per_customer)),
        tokens: Arc::new(seed.token_service()),
        geo: GeoService::new(Arc::new(places)),
    });

    web::run(&config.server.host, config.server.port, state).await
}
