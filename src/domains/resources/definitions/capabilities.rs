//! Capability collection resource definition.

use super::ResourceDefinition;
use crate::domains::discovery::DiscoveryQuery;

/// The raw capability collection bundled with the server.
pub struct CapabilitiesResource;

impl ResourceDefinition for CapabilitiesResource {
    const URI: &'static str = "riskmodels:///capabilities";
    const NAME: &'static str = "RiskModels API Capabilities";
    const DESCRIPTION: &'static str =
        "List of API capabilities with endpoints, parameters, pricing";
    const MIME_TYPE: &'static str = "application/json";

    fn query() -> DiscoveryQuery {
        DiscoveryQuery::Capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_metadata() {
        assert_eq!(CapabilitiesResource::URI, "riskmodels:///capabilities");
        assert_eq!(CapabilitiesResource::query(), DiscoveryQuery::Capabilities);
    }
}
