//! locprov - IP to country lookup
//!
//! This is the composition root that wires together all the components.

use clap::Parser;
use locprov::adapters::inbound::{run, CliArgs};
use locprov::{load_config, LocationProvider};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Environment first, command line overrides
    let cfg = args.apply(load_config()?);

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "plugin_dir={} plugin_version={:?} locale={}",
        cfg.plugin_dir,
        cfg.plugin_version,
        cfg.locale
    );

    let provider = LocationProvider::from_config(&cfg);
    tracing::debug!("using {}", provider.provider_name());

    let stdout = std::io::stdout();
    let result = run(&args, &provider, &cfg.locale, &mut stdout.lock());

    provider.destroy();

    result
}
