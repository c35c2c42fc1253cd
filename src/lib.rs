//! RiskModels API discovery MCP server.
//!
//! Exposes the RiskModels financial-data API to automated callers through
//! MCP resources (manifest, capabilities, schemas, OpenAPI document) and
//! tools for capability and schema lookup. All content is served from the
//! bundled artifact directory, with an optional remote-first path for the
//! agent manifest.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and the
//!   transport layer
//! - **domains**: business logic organized by bounded contexts
//!   - **discovery**: artifact store, key normalization, resolution engine
//!   - **resources**: MCP resources readable by clients
//!   - **tools**: MCP tools callable by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use riskmodels_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
