//! Agent manifest resource definition.

use super::ResourceDefinition;
use crate::domains::discovery::DiscoveryQuery;

/// Agent Protocol service discovery manifest.
///
/// The only remote-preferred resource: fetched from the live API when a
/// base URL is configured, synthesized from the local capability list
/// otherwise.
pub struct ManifestResource;

impl ResourceDefinition for ManifestResource {
    const URI: &'static str = "riskmodels:///manifest";
    const NAME: &'static str = "RiskModels Agent Manifest";
    const DESCRIPTION: &'static str =
        "Agent Protocol service discovery manifest (from API when base URL set)";
    const MIME_TYPE: &'static str = "application/json";

    fn query() -> DiscoveryQuery {
        DiscoveryQuery::Manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_metadata() {
        assert_eq!(ManifestResource::URI, "riskmodels:///manifest");
        assert_eq!(ManifestResource::MIME_TYPE, "application/json");
        assert_eq!(ManifestResource::query(), DiscoveryQuery::Manifest);
    }
}
