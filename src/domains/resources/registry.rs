//! Resource Registry - central registration of all resources.
//!
//! This module provides dynamic resource registration without modifying
//! service.rs. When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    CapabilitiesResource, ManifestResource, OpenApiResource, ResourceDefinition,
    SchemaIndexResource,
};
use super::service::ResourceEntry;

/// URI template for the per-schema resource.
pub const SCHEMA_URI_TEMPLATE: &str = "riskmodels:///schemas/{path}";

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        query: R::query(),
    }
}

/// Get all registered fixed-address resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ManifestResource>(),
        build_resource::<CapabilitiesResource>(),
        build_resource::<SchemaIndexResource>(),
        build_resource::<OpenApiResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in. Concrete instances
/// are enumerated from the SchemaIndex by the service.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: SCHEMA_URI_TEMPLATE.to_string(),
            name: "RiskModels Response Schema".to_string(),
            title: Some("Response Schema by Path".to_string()),
            description: Some(
                "JSON schema for an API response by path (e.g. ticker-returns-v2.json)"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all fixed resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        ManifestResource::URI,
        CapabilitiesResource::URI,
        SchemaIndexResource::URI,
        OpenApiResource::URI,
    ]
}
