//! Text Tools MCP Server Library
//!
//! An MCP server hosting a catalog of independent text and data utilities:
//! format converters, validators, formatters, text analysis, and
//! generators, plus the catalog/search machinery that organizes them.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler, and the
//!   transport layer (STDIO/TCP/HTTP behind feature flags)
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: immutable descriptor table, lookup index, search
//!   - **tools**: the transformation tools and their MCP glue
//!   - **resources**: catalog views exposed as MCP resources
//!   - **feedback**: the external mail-relay boundary
//!   - **telemetry**: fire-and-forget usage events
//!
//! # Example
//!
//! ```rust,no_run
//! use text_tools_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
