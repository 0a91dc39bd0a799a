use anyhow::Context;
use portfolio::config::{self, SiteConfig};
use portfolio::content::{self, Profile};

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(config: &SiteConfig) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
fn init_tracing(config: &SiteConfig) {
    // Only fails when a logger is already installed.
    let _ = dioxus::logger::init(config.log_level());
}

fn main() -> anyhow::Result<()> {
    let (site_config, rejected) = SiteConfig::load();
    init_tracing(&site_config);
    for err in rejected {
        tracing::warn!(%err, "ignoring invalid config value");
    }

    let profile = Profile::bundled().context("loading bundled profile")?;
    tracing::info!(
        owner = %profile.name,
        theme = ?site_config.theme,
        reply_delay = ?site_config.reply_delay,
        "starting portfolio"
    );

    config::install(site_config);
    content::install(profile);
    dioxus::launch(portfolio::ui::App);
    Ok(())
}
