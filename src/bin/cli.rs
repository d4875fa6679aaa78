//! floor-tally CLI
//!
//! Opens (or attaches to) Chrome, reads the listing in the active tab and
//! prints its rooms grouped by floor.

use clap::{Parser, ValueEnum};
use floor_tally::listing::LeadingRows;
use floor_tally::render::OutputFormat;
use floor_tally::tools::utils::normalize_url;
use floor_tally::{BrowserSession, ConnectionOptions, ExtractionConfig, LaunchOptions, present};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// List with a symbol per floor and room type
    Symbols,
    /// Flat list
    Plain,
    /// JSON document
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Symbols => OutputFormat::Symbols,
            Format::Plain => OutputFormat::Plain,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Leading {
    /// Group rooms before the first floor label under "Unlabeled"
    Unlabeled,
    /// Treat rooms before the first floor label as an error
    Reject,
}

impl From<Leading> for LeadingRows {
    fn from(leading: Leading) -> Self {
        match leading {
            Leading::Unlabeled => LeadingRows::Unlabeled,
            Leading::Reject => LeadingRows::Reject,
        }
    }
}

#[derive(Parser)]
#[command(name = "floor-tally")]
#[command(version)]
#[command(about = "Group a real-estate listing's rooms by floor and total their areas", long_about = None)]
struct Cli {
    /// Listing URL to open; without it the already open tab is read
    url: Option<String>,

    /// WebSocket endpoint URL of a running browser to attach to
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<PathBuf>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    /// JSON file with site rules and page markers
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// What to do with rooms listed before the first floor label
    #[arg(long, value_enum)]
    leading_rows: Option<Leading>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "symbols")]
    format: Format,
}

fn open_session(cli: &Cli, config: ExtractionConfig) -> floor_tally::Result<BrowserSession> {
    let session = match &cli.ws_endpoint {
        Some(url) => BrowserSession::connect(ConnectionOptions::new(url))?,
        None => {
            let mut options = LaunchOptions::new().headless(!cli.headed);
            if let Some(path) = &cli.executable_path {
                options = options.chrome_path(path);
            }
            if let Some(dir) = &cli.user_data_dir {
                options = options.user_data_dir(dir);
            }
            BrowserSession::launch(options)?
        }
    };
    Ok(session.with_config(config))
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExtractionConfig::from_file(path)?,
        None => ExtractionConfig::default(),
    };
    if let Some(leading) = cli.leading_rows {
        config.leading_rows = leading.into();
    }

    let session = open_session(&cli, config)?;

    if let Some(url) = &cli.url {
        let url = normalize_url(url);
        log::info!("Opening {}", url);
        session.navigate(&url)?;
        session.wait_for_navigation()?;
    }

    eprintln!("Reading rooms...");
    let outcome = session.extract_listing();
    let renderer = OutputFormat::from(cli.format).renderer();
    println!("{}", present(&outcome, renderer.as_ref()));

    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_failure() => Err(err.into()),
        Err(_) => Ok(ExitCode::from(2)),
    }
}
