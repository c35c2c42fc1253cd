//! Get-capability tool.
//!
//! Returns the full capability record by id, including the open set of
//! extra fields (parameters, pricing, examples). Matching is exact.

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

/// Parameters for the get-capability tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCapabilityParams {
    /// The capability identifier to look up.
    #[schemars(description = "Capability id (e.g. ticker-returns, risk-decomposition)")]
    pub id: String,
}

/// Get Capability Details tool implementation.
#[derive(Debug, Clone)]
pub struct GetCapabilityTool;

impl GetCapabilityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "riskmodels_get_capability";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get full capability details (parameters, pricing, examples) by id";

    /// Execute the tool logic.
    pub fn execute(resolver: &DiscoveryResolver, params: &GetCapabilityParams) -> CallToolResult {
        info!("Looking up capability: {}", params.id);
        envelope_result(resolver.capability_detail(&params.id))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCapabilityParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let resolver = resolver.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GetCapabilityParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&resolver, &params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DiscoveryConfig;
    use rmcp::model::RawContent;
    use std::fs;
    use tempfile::TempDir;

    fn resolver_with_capabilities() -> (TempDir, DiscoveryResolver) {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("capabilities.json"),
            r#"[{"id": "ticker-returns", "name": "Ticker Returns", "method": "GET",
                 "endpoint": "/api/ticker-returns", "description": "Daily returns",
                 "pricing": {"per_call_usd": 0.01}}]"#,
        )
        .unwrap();
        let resolver = DiscoveryResolver::new(DiscoveryConfig {
            data_dir: dir.path().to_path_buf(),
            api_base: None,
            fetch_timeout_secs: 5,
        });
        (dir, resolver)
    }

    fn result_json(result: &CallToolResult) -> serde_json::Value {
        match &result.content[0].raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_params_require_id() {
        let parsed: Result<GetCapabilityParams, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_execute_returns_full_record() {
        let (_dir, resolver) = resolver_with_capabilities();
        let params = GetCapabilityParams {
            id: "ticker-returns".to_string(),
        };
        let result = GetCapabilityTool::execute(&resolver, &params);
        assert!(!result.is_error.unwrap_or(false));

        let record = result_json(&result);
        assert_eq!(record["pricing"]["per_call_usd"], 0.01);
    }

    #[test]
    fn test_execute_unknown_id_lists_available() {
        let (_dir, resolver) = resolver_with_capabilities();
        let params = GetCapabilityParams {
            id: "nope".to_string(),
        };
        let result = GetCapabilityTool::execute(&resolver, &params);
        assert!(result.is_error.unwrap_or(false));

        let body = result_json(&result);
        assert_eq!(body["error"], "Unknown capability: nope");
        assert_eq!(body["available"], serde_json::json!(["ticker-returns"]));
    }

    #[test]
    fn test_execute_case_mismatch_is_not_found() {
        let (_dir, resolver) = resolver_with_capabilities();
        let params = GetCapabilityParams {
            id: "Ticker-Returns".to_string(),
        };
        let result = GetCapabilityTool::execute(&resolver, &params);
        assert!(result.is_error.unwrap_or(false));
    }
}
