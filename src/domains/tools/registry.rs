//! Tool Registry - central tool metadata.
//!
//! Single source of truth for the set of available tools; the router and
//! tests cross-check against it.

use rmcp::model::Tool;

use super::definitions::{GetCapabilityTool, GetSchemaTool, ListEndpointsTool};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListEndpointsTool::NAME,
            GetCapabilityTool::NAME,
            GetSchemaTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListEndpointsTool::to_tool(),
            GetCapabilityTool::to_tool(),
            GetSchemaTool::to_tool(),
        ]
    }
}
