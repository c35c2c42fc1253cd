//! Get-schema tool.
//!
//! Returns the JSON schema for an API response. The path argument is
//! normalized: a `/schemas/` prefix and the `.json` extension are both
//! optional.

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

/// Parameters for the get-schema tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSchemaParams {
    /// The schema path or filename to look up.
    #[schemars(
        description = "Schema path or filename (e.g. ticker-returns-v2.json or /schemas/ticker-returns-v2.json)"
    )]
    pub path: String,
}

/// Get Response Schema tool implementation.
#[derive(Debug, Clone)]
pub struct GetSchemaTool;

impl GetSchemaTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "riskmodels_get_schema";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get JSON schema for an API response by path (e.g. ticker-returns-v2.json)";

    /// Execute the tool logic.
    pub fn execute(resolver: &DiscoveryResolver, params: &GetSchemaParams) -> CallToolResult {
        info!("Looking up schema: {}", params.path);
        envelope_result(resolver.schema(&params.path))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSchemaParams>(),
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
                let params: GetSchemaParams =
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

    fn resolver_with_schema() -> (TempDir, DiscoveryResolver) {
        let dir = TempDir::new().unwrap();
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
    fn test_params_require_path() {
        let parsed: Result<GetSchemaParams, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_execute_equivalent_forms_resolve_identically() {
        let (_dir, resolver) = resolver_with_schema();
        let bare = GetSchemaTool::execute(
            &resolver,
            &GetSchemaParams {
                path: "ticker-returns-v2".to_string(),
            },
        );
        let full = GetSchemaTool::execute(
            &resolver,
            &GetSchemaParams {
                path: "/schemas/ticker-returns-v2.json".to_string(),
            },
        );
        assert_eq!(result_json(&bare), result_json(&full));
        assert_eq!(result_json(&bare)["type"], "object");
    }

    #[test]
    fn test_execute_miss_carries_index() {
        let (_dir, resolver) = resolver_with_schema();
        let result = GetSchemaTool::execute(
            &resolver,
            &GetSchemaParams {
                path: "missing".to_string(),
            },
        );
        assert!(result.is_error.unwrap_or(false));

        let body = result_json(&result);
        assert_eq!(body["error"], "Schema not found: missing.json");
        assert_eq!(
            body["available"],
            serde_json::json!(["/schemas/ticker-returns-v2.json"])
        );
    }
}
