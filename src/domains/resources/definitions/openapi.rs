//! OpenAPI document resource definition.

use super::ResourceDefinition;
use crate::domains::discovery::DiscoveryQuery;

/// OpenAPI 3.x specification for the API.
///
/// Declared as JSON; the resolved payload may carry the YAML MIME type
/// when only `openapi.yaml` is bundled.
pub struct OpenApiResource;

impl ResourceDefinition for OpenApiResource {
    const URI: &'static str = "riskmodels:///openapi";
    const NAME: &'static str = "RiskModels OpenAPI Spec";
    const DESCRIPTION: &'static str = "OpenAPI 3.x specification for the API";
    const MIME_TYPE: &'static str = "application/json";

    fn query() -> DiscoveryQuery {
        DiscoveryQuery::OpenApi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_metadata() {
        assert_eq!(OpenApiResource::URI, "riskmodels:///openapi");
        assert_eq!(OpenApiResource::query(), DiscoveryQuery::OpenApi);
    }
}
