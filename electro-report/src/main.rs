use anyhow::Context;
use electro_report::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "electro_report=info,electro_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        items = config.items.len(),
        format = ?config.report.format,
        "Starting Electro report"
    );

    let output = electro_report::run(&config).map_err(|err| {
        tracing::error!("Report failed: {}", err);
        err
    })?;

    print!("{}", output);
    Ok(())
}
