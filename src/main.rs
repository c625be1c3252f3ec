use anyhow::{Context, Result, bail};
use blog_architect::{config, config::Config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// `RUST_LOG` directives win over the configured level, which must be a
/// plain level name.
fn log_filter(config: &Config, rust_log: Option<&str>) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG directives: '{directives}'"));
    }

    let level = &config.server.logs.level;
    if level.parse::<LevelFilter>().is_err() {
        bail!("Invalid log level: '{level}'. Valid levels: error, warn, info, debug, trace");
    }
    Ok(EnvFilter::new(level))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(&config, rust_log.as_deref())?;
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        bind = %format!("{}:{}", config.server.host, config.server.port),
        provider = ?config.llm.provider,
        model = %config.llm.model,
        "SEO Blog Architect starting"
    );

    server::run(config).await?;

    Ok(())
}
