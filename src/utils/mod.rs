//! Utility modules supporting CourtListener operations.
//!
//! This module provides the text-level helpers used throughout the library:
//!
//! - [`strip_html`]: Strip markup and decode entities from API text fields
//! - [`citation_query`]: Turn a legal citation into a search query
//!
//! # Normalizing API text
//!
//! ```rust
//! use courtlistener_mcp::utils::strip_html;
//!
//! let snippet = "<p>The judgment is <em>affirmed</em>.&nbsp;&sect;&nbsp;1983</p>";
//! assert_eq!(strip_html(snippet), "The judgment is affirmed. \u{a7} 1983");
//! ```
//!
//! # Parsing citations
//!
//! ```rust
//! use courtlistener_mcp::utils::citation_query;
//!
//! assert_eq!(citation_query("410 U.S. 113"), r#"citation:"410 U.S. 113""#);
//! assert_eq!(citation_query("Roe v. Wade"), r#""Roe v. Wade""#);
//! ```

pub mod cite;
pub mod text;

pub use cite::citation_query;
pub use text::strip_html;
