//! Resource service implementation.
//!
//! The ResourceService is the resource side of the registry front: it maps
//! URIs to discovery queries and adapts envelopes to rmcp result types.
//! Resolution rules live entirely in the discovery resolver.

use rmcp::model::{
    AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents, ResourceTemplate,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::discovery::keys::schema_display_name;
use crate::domains::discovery::{
    DiscoveryQuery, DiscoveryResolver, Envelope, SCHEMA_URI_PREFIX, schema_resource_uri,
};

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// The resolution engine all reads go through.
    resolver: Arc<DiscoveryResolver>,

    /// Registry of fixed-address resources.
    /// Key: resource URI, Value: resource metadata + bound query
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The discovery query bound to this resource.
    pub query: DiscoveryQuery,
}

impl ResourceService {
    /// Create a new ResourceService over the given resolver.
    pub fn new(resolver: Arc<DiscoveryResolver>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.to_string(), entry))
            .collect();

        Self {
            resolver,
            resources,
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    ///
    /// Fixed-address resources plus one concrete entry per SchemaIndex
    /// path, so templated schemas are fully enumerable.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();

        for path in self.resolver.schema_paths() {
            let mut raw = RawResource::new(
                schema_resource_uri(&path),
                schema_display_name(&path).to_string(),
            );
            raw.mime_type = Some("application/json".to_string());
            resources.push(raw.no_annotation());
        }

        resources
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// A registered URI always yields a well-formed result: absent
    /// artifacts travel as structured error payloads inside the envelope.
    /// Only an unregistered URI is a protocol-level error.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if let Some(entry) = self.resources.get(uri) {
            let envelope = self.resolver.resolve(entry.query).await;
            return Ok(envelope_result(uri, envelope));
        }

        // Templated per-schema resource: anything under the schemas
        // namespace not claimed by a fixed address.
        if let Some(suffix) = uri.strip_prefix(SCHEMA_URI_PREFIX) {
            let envelope = self.resolver.schema(suffix);
            return Ok(envelope_result(uri, envelope));
        }

        Err(ResourceError::not_found(uri))
    }
}

/// Wrap an envelope as rmcp resource contents, echoing the address back.
fn envelope_result(uri: &str, envelope: Envelope) -> ReadResourceResult {
    let mime_type = envelope.mime_type();
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(mime_type.to_string()),
            text: envelope.into_text(),
            meta: None,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DiscoveryConfig;
    use std::fs;
    use tempfile::TempDir;

    fn service_with_data() -> (TempDir, ResourceService) {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("capabilities.json"),
            r#"[{"id": "ticker-returns", "name": "Ticker Returns", "method": "GET",
                 "endpoint": "/api/ticker-returns", "description": "Daily returns"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("schema-paths.json"),
            r#"["/schemas/ticker-returns-v2.json"]"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("schemas")).unwrap();
        fs::write(
            dir.path().join("schemas/ticker-returns-v2.json"),
            r#"{"type": "object"}"#,
        )
        .unwrap();

        let resolver = Arc::new(DiscoveryResolver::new(DiscoveryConfig {
            data_dir: dir.path().to_path_buf(),
            api_base: None,
            fetch_timeout_secs: 5,
        }));
        (dir, ResourceService::new(resolver))
    }

    fn text_of(result: ReadResourceResult) -> (Option<String>, String) {
        match result.contents.into_iter().next().unwrap() {
            ResourceContents::TextResourceContents {
                mime_type, text, ..
            } => (mime_type, text),
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_includes_fixed_and_schema_resources() {
        let (_dir, service) = service_with_data();
        let resources = service.list_resources().await;

        let uris: Vec<_> = resources.iter().map(|r| r.raw.uri.as_str()).collect();
        assert!(uris.contains(&"riskmodels:///manifest"));
        assert!(uris.contains(&"riskmodels:///schemas/list"));
        assert!(uris.contains(&"riskmodels:///schemas/ticker-returns-v2.json"));
        assert_eq!(resources.len(), 5);
    }

    #[tokio::test]
    async fn test_read_manifest_is_local_fallback() {
        let (_dir, service) = service_with_data();
        let result = service
            .read_resource("riskmodels:///manifest")
            .await
            .unwrap();
        let (mime, text) = text_of(result);
        assert_eq!(mime.as_deref(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["service"]["name"], "RiskModels");
    }

    #[tokio::test]
    async fn test_read_schema_by_template_uri() {
        let (_dir, service) = service_with_data();
        let result = service
            .read_resource("riskmodels:///schemas/ticker-returns-v2")
            .await
            .unwrap();
        let (_mime, text) = text_of(result);
        let body: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["type"], "object");
    }

    #[tokio::test]
    async fn test_schemas_list_is_index_not_schema_lookup() {
        let (_dir, service) = service_with_data();
        let result = service
            .read_resource("riskmodels:///schemas/list")
            .await
            .unwrap();
        let (_mime, text) = text_of(result);
        let body: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body[0], "/schemas/ticker-returns-v2.json");
    }

    #[tokio::test]
    async fn test_missing_schema_is_structured_payload_not_error() {
        let (_dir, service) = service_with_data();
        let result = service
            .read_resource("riskmodels:///schemas/unknown")
            .await
            .unwrap();
        let (_mime, text) = text_of(result);
        let body: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"], "Schema not found: unknown.json");
    }

    #[tokio::test]
    async fn test_unregistered_uri_is_error() {
        let (_dir, service) = service_with_data();
        let result = service.read_resource("riskmodels:///nonexistent").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_resource_templates() {
        let (_dir, service) = service_with_data();
        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 1);
    }
}
