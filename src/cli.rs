use crate::tools::fetch::{fetch, FetchResult, DEFAULT_TIMEOUT};
use crate::tools::report::render_outcome;
use crate::ProbeError;
use clap::Parser;
use std::time::Duration;
use tracing::Level;
use url::Url;

/// The page this tool inspects.
pub const DEFAULT_TARGET: &str = "https://ktdbcl.actvn.edu.vn/khao-thi/hvsv/xem-diem-thi.html";

#[derive(Parser, Debug)]
#[command(
    name = "formprobe",
    version,
    about = "Fetch the exam-results page and list its forms and input fields"
)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Validated run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
    pub timeout: Duration,
    pub verbose: bool,
}

impl Config {
    /// Settings for an arbitrary http(s) target, for library callers.
    pub fn for_target(url: &str, timeout: Duration) -> crate::Result<Self> {
        let url = Url::parse(url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ProbeError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self {
            url,
            timeout,
            verbose: false,
        })
    }
}

impl Cli {
    pub fn into_config(self) -> crate::Result<Config> {
        let mut config = Config::for_target(DEFAULT_TARGET, DEFAULT_TIMEOUT)?;
        config.verbose = self.verbose;
        Ok(config)
    }
}

pub fn run() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;
    init_logging(config.verbose);
    run_with_config(&config)
}

/// Fetch, extract and print the report for an already validated config.
pub fn run_with_config(config: &Config) -> anyhow::Result<()> {
    let result = crate::runtime::block_on(fetch(&config.url, config.timeout))?;
    if let FetchResult::Failure { reason } = &result {
        tracing::debug!(%reason, "no content");
    }
    print!("{}", render_outcome(&result));
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
