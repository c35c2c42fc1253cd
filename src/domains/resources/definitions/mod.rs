//! Resource definitions module.
//!
//! Each fixed-address resource is defined in its own file and binds one
//! discovery query. The templated per-schema resource lives in
//! `registry.rs` since it has no fixed URI.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod capabilities;
mod manifest;
mod openapi;
mod schema_index;

pub use capabilities::CapabilitiesResource;
pub use manifest::ManifestResource;
pub use openapi::OpenApiResource;
pub use schema_index::SchemaIndexResource;

use crate::domains::discovery::DiscoveryQuery;

/// Trait for fixed-address resource definitions.
///
/// Each resource provides its metadata and the discovery query it binds to;
/// all content is produced by the resolution engine at read time.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type declared for the resource content.
    const MIME_TYPE: &'static str;

    /// The discovery query this resource resolves through.
    fn query() -> DiscoveryQuery;
}
