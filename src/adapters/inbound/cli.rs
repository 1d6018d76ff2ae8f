//! Command Line Adapter
//!
//! Parses command line arguments and prints one line per looked-up target.

use crate::application::LocationProvider;
use crate::config::Config;
use crate::domain::entities::GeoInfo;
use crate::domain::value_objects::FlagSize;
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::net::{IpAddr, ToSocketAddrs};

/// CLI arguments for locprov
#[derive(Debug, Parser)]
#[command(
    name = "locprov",
    version,
    about = "Resolve IP addresses to country codes, names and flag icons"
)]
pub struct CliArgs {
    /// Directory holding GeoLite2-Country*.mmdb and the optional images/ dir
    #[arg(short = 'd', long = "plugin-dir")]
    pub plugin_dir: Option<String>,

    /// Plugin version used to pick a version-qualified database
    #[arg(long = "plugin-version")]
    pub plugin_version: Option<String>,

    /// Locale for country names (e.g. fr, pt-BR)
    #[arg(short = 'l', long = "locale")]
    pub locale: Option<String>,

    /// Flag size index: 0 = 18x12, 1 = 25x15
    #[arg(short = 's', long = "size", default_value_t = 0)]
    pub size: usize,

    /// Print one JSON object per line
    #[arg(long = "json")]
    pub json: bool,

    /// IP addresses or host names
    #[arg(required = true)]
    pub targets: Vec<String>,
}

impl CliArgs {
    /// Apply command line overrides on top of the environment configuration.
    pub fn apply(&self, mut cfg: Config) -> Config {
        if let Some(dir) = &self.plugin_dir {
            cfg.plugin_dir = dir.clone();
        }
        if let Some(version) = &self.plugin_version {
            cfg.plugin_version = version.trim().to_string();
        }
        if let Some(locale) = &self.locale {
            cfg.locale = locale.clone();
        }
        cfg
    }
}

/// One output line.
#[derive(Debug, Serialize)]
struct Lookup<'a> {
    target: &'a str,
    ip: Option<IpAddr>,
    #[serde(flatten)]
    geo: Option<GeoInfo>,
}

/// Turn an IP literal or host name into an address.
///
/// Host names use the system resolver; the first address wins.
pub fn resolve_target(target: &str) -> anyhow::Result<IpAddr> {
    if let Ok(ip) = target.parse::<IpAddr>() {
        return Ok(ip);
    }

    (target, 0)
        .to_socket_addrs()
        .with_context(|| format!("cannot resolve host {}", target))?
        .map(|addr| addr.ip())
        .next()
        .with_context(|| format!("no addresses for host {}", target))
}

/// Look up every target and write the results to `out`.
pub fn run(
    args: &CliArgs,
    provider: &LocationProvider,
    locale: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let size = FlagSize::from_index(args.size);

    for target in &args.targets {
        let ip = match resolve_target(target) {
            Ok(ip) => Some(ip),
            Err(e) => {
                tracing::warn!("{:#}", e);
                None
            }
        };
        let geo = ip.and_then(|ip| provider.resolve_with(ip, locale, size));

        let line = Lookup {
            target,
            ip,
            geo,
        };

        if args.json {
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_plain(&line))?;
        }
    }

    Ok(())
}

/// `ip  CODE  Name  flag`, or `ip  unknown` when there is no country.
fn format_plain(line: &Lookup<'_>) -> String {
    let ip = line
        .ip
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| line.target.to_string());

    match &line.geo {
        Some(geo) => format!(
            "{}\t{}\t{}\t{}",
            ip,
            geo.country_code,
            geo.country_name.as_deref().unwrap_or("-"),
            geo.flag_icon_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        None => format!("{}\tunknown", ip),
    }
}
