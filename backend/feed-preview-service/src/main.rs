use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_network::{FakeApiService, FakeNetworkClient};
use feed_preview::config::Config;
use feed_preview::repository::FeedRepository;
use feed_preview::service::FeedService;
use feed_preview::ui::UiMapper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting feed-preview-service v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("Environment: {}", config.app.env);

    let network = Arc::new(FakeNetworkClient::new());
    let api = Arc::new(FakeApiService::new(network.clone()));
    let repository = Arc::new(FeedRepository::new(api, config.feed.page_size));
    let service = FeedService::new(repository, network, UiMapper::new(&config.feed.label));

    let status = service.ping("/health").await?;
    info!(status, "pinged backend");

    let model = service.build_ui_for_user(42).await?;
    info!(header = %model.header, rows = model.items.len(), "built feed for user 42");
    for row in &model.items {
        info!(id = row.id, title = %row.title, selected = row.selected, "row");
    }

    let demo = service.demo_complex_flow(5);
    info!(header = %demo.header, rows = demo.items.len(), "built demo feed");

    Ok(())
}
