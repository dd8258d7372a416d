//! MCP (Model Context Protocol) implementation.

mod handlers;
pub mod server;
pub mod tools;

pub use server::McpServer;
pub use tools::{Tool, ToolHandler, ToolRegistry};
