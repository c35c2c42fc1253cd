//! Resources domain module.
//!
//! The resource side of the registry front: fixed-address resources for the
//! manifest, capability collection, schema index, and OpenAPI document,
//! plus a templated per-schema resource enumerated from the SchemaIndex.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! This layer contains no resolution rules; it adapts discovery envelopes
//! to rmcp result types.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
