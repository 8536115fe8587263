use anyhow::Result;
use citycast::CitycastConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &CitycastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CitycastConfig::load()?;
    init_tracing(&config);

    tracing::info!(version = citycast::VERSION, "Starting citycast");
    citycast::web::run(config).await
}
