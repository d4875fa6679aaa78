//! floor-tally MCP Server
//!
//! This binary provides a Model Context Protocol (MCP) server that reads
//! floor plans from real-estate listings open in a Chrome session.

use clap::{Parser, ValueEnum};
use floor_tally::{ConnectionOptions, ExtractionConfig, FloorPlanServer, LaunchOptions};
use rmcp::{ServiceExt, transport::stdio};
use rmcp::transport::streamable_http_server::{StreamableHttpService, session::local::LocalSessionManager};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    /// Standard input/output transport (default)
    Stdio,
    /// HTTP streamable transport
    Http,
}

#[derive(Parser)]
#[command(name = "mcp-server")]
#[command(version)]
#[command(about = "Floor-plan extraction MCP server", long_about = None)]
struct Cli {
    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<PathBuf>,

    /// WebSocket endpoint URL of a running browser to attach to
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    /// JSON file with site rules and page markers
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Transport type to use
    #[arg(long, short = 't', value_enum, default_value = "stdio")]
    transport: Transport,

    /// Port for HTTP transport
    #[arg(long, short = 'p', default_value = "3000")]
    port: u16,

    /// HTTP streamable endpoint path
    #[arg(long, default_value = "/mcp")]
    http_path: String,
}

impl Cli {
    fn launch_options(&self) -> LaunchOptions {
        let mut options = LaunchOptions::new().headless(!self.headed);
        if let Some(path) = &self.executable_path {
            options = options.chrome_path(path);
        }
        if let Some(dir) = &self.user_data_dir {
            options = options.user_data_dir(dir);
        }
        options
    }

    fn build_server(&self, config: ExtractionConfig) -> floor_tally::Result<FloorPlanServer> {
        match &self.ws_endpoint {
            Some(url) => FloorPlanServer::connect(ConnectionOptions::new(url), config),
            None => FloorPlanServer::with_options(self.launch_options(), config),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP transport, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ExtractionConfig::from_file(path)?,
        None => ExtractionConfig::default(),
    };

    log::info!("floor-tally MCP Server v{}", env!("CARGO_PKG_VERSION"));
    match &cli.ws_endpoint {
        Some(endpoint) => log::info!("Attaching to browser at {}", endpoint),
        None => log::info!("Browser mode: {}", if cli.headed { "headed" } else { "headless" }),
    }

    match cli.transport {
        Transport::Stdio => {
            log::info!("Ready to accept MCP connections via stdio");
            let server = cli.build_server(config)?.serve(stdio()).await?;
            let quit_reason = server.waiting().await?;
            log::info!("Server quit with reason: {:?}", quit_reason);
            // Give destructors a moment to close the browser
            tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;
        }
        Transport::Http => {
            let bind_addr = format!("127.0.0.1:{}", cli.port);

            // Build the first server up front so a bad browser setup fails fast
            let server = cli.build_server(config)?;
            let service_factory = move || Ok(server.clone());

            let http_service = StreamableHttpService::new(
                service_factory,
                LocalSessionManager::default().into(),
                Default::default(),
            );

            let router = axum::Router::new().nest_service(&cli.http_path, http_service);

            log::info!("Ready to accept MCP connections at http://{}{}", bind_addr, cli.http_path);

            let listener = tokio::net::TcpListener::bind(bind_addr).await?;
            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}
