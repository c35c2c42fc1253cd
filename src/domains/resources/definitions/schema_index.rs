//! Schema index resource definition.

use super::ResourceDefinition;
use crate::domains::discovery::DiscoveryQuery;

/// The list of available response schema paths.
///
/// Registered under the schemas namespace; exact-URI lookup wins over the
/// per-schema template, so `list` is never treated as a schema key.
pub struct SchemaIndexResource;

impl ResourceDefinition for SchemaIndexResource {
    const URI: &'static str = "riskmodels:///schemas/list";
    const NAME: &'static str = "RiskModels Schema Paths";
    const DESCRIPTION: &'static str = "List of available response schema paths";
    const MIME_TYPE: &'static str = "application/json";

    fn query() -> DiscoveryQuery {
        DiscoveryQuery::SchemaIndex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_index_metadata() {
        assert_eq!(SchemaIndexResource::URI, "riskmodels:///schemas/list");
        assert_eq!(SchemaIndexResource::query(), DiscoveryQuery::SchemaIndex);
    }
}
