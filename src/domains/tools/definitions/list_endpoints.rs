//! List-endpoints tool.
//!
//! Returns every public capability as a summary record (id, name, method,
//! endpoint, description truncated to 80 characters), in stored order.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::envelope_result;
use crate::domains::discovery::DiscoveryResolver;

/// Parameters for the list-endpoints tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListEndpointsParams {}

/// List Endpoints tool implementation.
#[derive(Debug, Clone)]
pub struct ListEndpointsTool;

impl ListEndpointsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "riskmodels_list_endpoints";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all public API capabilities (id, name, method, endpoint, short description)";

    /// Execute the tool logic.
    pub fn execute(resolver: &DiscoveryResolver) -> CallToolResult {
        info!("Listing API endpoints");
        envelope_result(resolver.capability_list())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListEndpointsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the given resolver.
    pub fn create_route<S>(resolver: Arc<DiscoveryResolver>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let resolver = resolver.clone();
            async move { Ok::<_, McpError>(Self::execute(&resolver)) }.boxed()
        })
    }
}
