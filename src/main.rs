//! CourtListener MCP server and command-line interface.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use courtlistener_mcp::client::{CourtListenerClient, SearchOptions};
use courtlistener_mcp::config::{find_config_file, get_config, load_config};
use courtlistener_mcp::mcp::server::McpServer;

/// Largest number of results a single search will return
const MAX_LIMIT: usize = 50;

/// CourtListener MCP - Search US case law and court opinions
#[derive(Parser, Debug)]
#[command(name = "courtlistener-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search US case law and court opinions via the CourtListener API", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (pretty JSON if TTY, compact otherwise)
    Auto,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    Compact,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for court opinions
    #[command(alias = "s")]
    Search {
        /// Search terms (or a plain-language question with --semantic)
        query: String,

        /// Court ID or shortcut (e.g., "scotus", "9th")
        #[arg(long, short)]
        court: Option<String>,

        /// Only opinions filed after this date (YYYY-MM-DD)
        #[arg(long)]
        date_after: Option<String>,

        /// Only opinions filed before this date (YYYY-MM-DD)
        #[arg(long)]
        date_before: Option<String>,

        /// Maximum number of results (capped at 50)
        #[arg(long, short, default_value_t = 20)]
        limit: usize,

        /// Match by meaning rather than keywords
        #[arg(long)]
        semantic: bool,
    },

    /// Fetch an opinion with its full text and metadata
    #[command(alias = "o")]
    Opinion {
        /// Opinion ID from a search result
        opinion_id: i64,
    },

    /// Look up a legal citation
    #[command(alias = "cite")]
    Citation {
        /// Citation string (e.g., "410 U.S. 113")
        citation: String,
    },

    /// List all courts known to CourtListener
    Courts,

    /// Locate an opinion's PDF, optionally downloading it
    Pdf {
        /// Opinion ID from a search result
        opinion_id: i64,

        /// Save the PDF to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Run the MCP server (for Claude Desktop and other MCP clients)
    Serve {
        /// Run in stdio mode
        #[arg(long, default_value_t = true)]
        stdio: bool,

        /// Run in HTTP/SSE mode instead of stdio
        #[arg(long)]
        http: bool,

        /// Port for HTTP mode
        #[arg(long, short, default_value_t = 3000)]
        port: u16,

        /// Host to bind for HTTP mode
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

/// Print a result as JSON: pretty on terminals, compact when piped
fn print_result<T: Serialize>(value: &T, output: OutputFormat) -> Result<()> {
    let pretty = match output {
        OutputFormat::Json => true,
        OutputFormat::Compact => false,
        OutputFormat::Auto => std::io::stdout().is_terminal(),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr: stdout carries results, and in stdio serve
    // mode it carries the MCP protocol itself.
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { level };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("courtlistener_mcp={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = if let Some(path) = &cli.config {
        load_config(path)?
    } else if let Some(path) = find_config_file() {
        tracing::debug!("Using config file: {}", path.display());
        load_config(&path)?
    } else {
        get_config()
    };
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }

    let client = Arc::new(CourtListenerClient::with_config(config.api));

    match cli.command {
        Some(Commands::Search {
            query,
            court,
            date_after,
            date_before,
            limit,
            semantic,
        }) => {
            let options = SearchOptions {
                court,
                date_after,
                date_before,
                limit: limit.min(MAX_LIMIT),
                semantic,
            };
            let results = client.search_opinions(&query, &options).await?;
            print_result(&results, cli.output)?;
        }

        Some(Commands::Opinion { opinion_id }) => {
            let opinion = client.get_opinion(opinion_id).await?;
            print_result(&opinion, cli.output)?;
        }

        Some(Commands::Citation { citation }) => {
            let lookup = client.lookup_citation(&citation).await?;
            print_result(&lookup, cli.output)?;
        }

        Some(Commands::Courts) => {
            let listing = client.list_courts().await?;
            print_result(&listing, cli.output)?;
        }

        Some(Commands::Pdf { opinion_id, save }) => {
            let result = client.get_opinion_pdf(opinion_id, save.as_deref()).await?;
            print_result(&result, cli.output)?;
        }

        Some(Commands::Serve {
            stdio,
            http,
            port,
            host,
        }) => {
            let server = McpServer::new(client)?;
            let use_http = http || !stdio;
            if use_http {
                let addr = format!("{}:{}", host, port);
                let (bound_addr, handle) = server.run_http(&addr).await?;
                tracing::info!("MCP server listening on http://{}", bound_addr);
                handle
                    .await
                    .map_err(|e| anyhow::anyhow!("Server task failed: {}", e))?;
            } else {
                server.run().await?;
            }
        }

        // No subcommand behaves like `serve`: stdio is the entrypoint MCP
        // client configurations expect.
        None => {
            let server = McpServer::new(client)?;
            server.run().await?;
        }
    }

    Ok(())
}
