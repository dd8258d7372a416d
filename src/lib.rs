//! # CourtListener MCP
//!
//! An MCP (Model Context Protocol) server for searching US case law and
//! retrieving court opinions from the [CourtListener](https://www.courtlistener.com)
//! API.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`client`]: The CourtListener API client (session handling, search,
//!   opinions, citations, courts, PDFs)
//! - [`models`]: Result types returned by every operation
//! - [`mcp`]: MCP protocol implementation and server
//! - [`utils`]: Text normalization and citation parsing
//! - [`config`]: Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtlistener_mcp::client::{CourtListenerClient, SearchOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CourtListenerClient::new();
//! let options = SearchOptions::default().court("scotus").limit(5);
//! let results = client.search_opinions("qualified immunity", &options).await?;
//! for hit in &results.results {
//!     println!("{} ({})", hit.case_name, hit.date_filed.as_deref().unwrap_or("n.d."));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod mcp;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use client::{ClientError, CourtListenerClient, SearchOptions};
pub use models::{CitationLookup, CourtListing, OpinionRecord, PdfResult, SearchResults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
