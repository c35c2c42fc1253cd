//! Domain modules organized by bounded context.
//!
//! - **discovery**: artifact store, key normalization, and the resolution
//!   engine behind every query
//! - **resources**: MCP resources (manifest, capabilities, schemas, OpenAPI)
//! - **tools**: MCP tools callable by clients

pub mod discovery;
pub mod resources;
pub mod tools;
