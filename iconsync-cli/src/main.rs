use clap::Parser;
use iconsync_cli::config::{Cli, SyncConfig};
use iconsync_cli::pipeline;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SyncConfig::resolve(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    info!(package = %config.package_name, "starting Figma icon sync");
    match pipeline::run(&config).await {
        Ok(report) => {
            info!(
                icons = report.assets_downloaded,
                skipped = report.skipped.len(),
                files = report.files_written,
                "icon sync completed successfully"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "icon sync failed");
            std::process::exit(1);
        }
    }
}
