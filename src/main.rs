use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use ads_report::config::{
    ENV_ACCESS_TOKEN, ENV_CUSTOMER_ID, ENV_DEVELOPER_TOKEN, ENV_LOGIN_CUSTOMER_ID,
};
use ads_report::{AdsReport, AdsReportError, Settings};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Print the top 10 ad groups by spend over the last 30 days.
#[derive(Debug, Parser)]
#[command(name = "ads-report", version, about)]
struct Cli {
    /// Account to report on (dashes allowed)
    #[arg(long, env = ENV_CUSTOMER_ID)]
    customer_id: Option<String>,

    /// Manager account used to access the customer
    #[arg(long, env = ENV_LOGIN_CUSTOMER_ID)]
    login_customer_id: Option<String>,

    #[arg(long, env = ENV_DEVELOPER_TOKEN, hide_env_values = true)]
    developer_token: Option<String>,

    /// OAuth2 access token, used as-is
    #[arg(long, env = ENV_ACCESS_TOKEN, hide_env_values = true)]
    access_token: Option<String>,

    /// API version path segment, e.g. v20
    #[arg(long)]
    api_version: Option<String>,

    /// Base URL of the reporting API
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Replay a saved search response instead of calling the API
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn overrides(&self) -> Settings {
        Settings {
            developer_token: self.developer_token.clone(),
            customer_id: self.customer_id.clone(),
            login_customer_id: self.login_customer_id.clone(),
            access_token: self.access_token.clone(),
            api_version: self.api_version.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(!cli.no_color && io::stderr().is_terminal())
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            AdsReportError::Config(_) => 2,
            AdsReportError::Api { .. } => 3,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: &Cli) -> ads_report::Result<()> {
    let mut builder = AdsReport::builder().overrides(cli.overrides());
    if let Some(path) = &cli.settings {
        builder = builder.settings_file(path);
    }
    if let Some(path) = &cli.fixture {
        builder = builder.fixture(path);
    }

    let report = builder.build()?;
    let stdout = io::stdout();
    report.render(&mut stdout.lock())?;
    Ok(())
}
