use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use log::LevelFilter;

use super::logging::LogDestination;

pub const BACKEND_ENV: &str = "GIGARELAY_BACKEND_URL";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
/// Base URL baked in at build time, if the variable was set then.
const BUILD_BACKEND_URL: Option<&str> = option_env!("GIGARELAY_BACKEND_URL");

#[derive(Debug, Parser)]
#[command(
    name = "gigarelay",
    version,
    about = "Upload a file or remote URL through a GigaFile relay and get shareable links"
)]
pub struct Cli {
    /// Backend base URL, e.g. https://relay.example
    #[arg(long, value_name = "URL", env = BACKEND_ENV)]
    pub backend: Option<String>,

    /// Directory for preferences and the log file.
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Interface language for this run (en, ru, es, de, fr, ja, zh, pt).
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub state_dir: PathBuf,
    pub lang_override: Option<String>,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let backend_url = resolve_backend_url(cli.backend.as_deref(), BUILD_BACKEND_URL)?;
        let state_dir = match cli.state_dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .map(|dir| dir.join("gigarelay"))
                .context("no platform config directory; pass --state-dir")?,
        };
        Ok(Self {
            backend_url,
            state_dir,
            lang_override: cli.lang,
            log_destination: cli.log,
            log_level: if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        })
    }
}

/// Flag or run-time environment first, then the build-time value, then the
/// local default. Only http(s) URLs are accepted.
fn resolve_backend_url(explicit: Option<&str>, built_in: Option<&str>) -> anyhow::Result<String> {
    let raw = explicit
        .or(built_in)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL);

    let parsed = url::Url::parse(raw).with_context(|| format!("invalid backend URL {raw:?}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("backend URL must use http or https, got {raw:?}");
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_beats_build_time_value() {
        let url = resolve_backend_url(Some("https://relay.example/"), Some("https://old.example"))
            .unwrap();
        assert_eq!(url, "https://relay.example");
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        assert_eq!(
            resolve_backend_url(Some("  "), None).unwrap(),
            DEFAULT_BACKEND_URL
        );
        assert_eq!(
            resolve_backend_url(None, Some("https://built.example")).unwrap(),
            "https://built.example"
        );
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert!(resolve_backend_url(Some("ftp://relay.example"), None).is_err());
        assert!(resolve_backend_url(Some("not a url"), None).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "gigarelay",
            "--backend",
            "https://relay.example",
            "--state-dir",
            "/tmp/gr",
            "--lang",
            "de",
            "--log",
            "both",
            "-v",
        ])
        .unwrap();
        let config = AppConfig::from_cli(cli).unwrap();
        assert_eq!(config.backend_url, "https://relay.example");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/gr"));
        assert_eq!(config.lang_override.as_deref(), Some("de"));
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
