//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them to the shared discovery resolver.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{GetCapabilityTool, GetSchemaTool, ListEndpointsTool};
use crate::domains::discovery::DiscoveryResolver;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(resolver: Arc<DiscoveryResolver>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListEndpointsTool::create_route(resolver.clone()))
        .with_route(GetCapabilityTool::create_route(resolver.clone()))
        .with_route(GetSchemaTool::create_route(resolver))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::DiscoveryConfig;

    struct TestServer {}

    fn test_resolver() -> Arc<DiscoveryResolver> {
        Arc::new(DiscoveryResolver::new(DiscoveryConfig::default()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_resolver());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"riskmodels_list_endpoints"));
        assert!(names.contains(&"riskmodels_get_capability"));
        assert!(names.contains(&"riskmodels_get_schema"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_resolver());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
