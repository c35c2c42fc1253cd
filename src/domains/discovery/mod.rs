//! Discovery domain: the resolution layer behind every resource and tool.
//!
//! ## Architecture
//!
//! - `store.rs` - read-only artifact store over the bundled data directory
//! - `keys.rs` - normalization of schema identifiers into artifact keys
//! - `model.rs` - capability records, summaries, and the response envelope
//! - `resolver.rs` - the resolution engine (remote-vs-local precedence)
//!
//! The resource and tool layers adapt [`Envelope`]s to rmcp result types and
//! contain no resolution rules of their own.

pub mod keys;
pub mod model;
pub mod resolver;
pub mod store;

pub use keys::{SCHEMA_PATH_PREFIX, SCHEMA_URI_PREFIX, normalize_schema_key, schema_resource_uri};
pub use model::{Capability, CapabilitySummary, Envelope};
pub use resolver::{DiscoveryQuery, DiscoveryResolver, RemoteError};
pub use store::ArtifactStore;
