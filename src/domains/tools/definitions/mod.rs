//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

mod get_capability;
mod get_schema;
mod list_endpoints;

pub use get_capability::{GetCapabilityParams, GetCapabilityTool};
pub use get_schema::{GetSchemaParams, GetSchemaTool};
pub use list_endpoints::ListEndpointsTool;

use rmcp::model::{CallToolResult, Content};

use crate::domains::discovery::Envelope;

/// Adapt a discovery envelope to a tool call result.
///
/// Payloads become success content; not-found envelopes keep their
/// structured JSON body but are flagged as tool errors.
pub(crate) fn envelope_result(envelope: Envelope) -> CallToolResult {
    let is_not_found = envelope.is_not_found();
    let text = envelope.into_text();
    if is_not_found {
        CallToolResult::error(vec![Content::text(text)])
    } else {
        CallToolResult::success(vec![Content::text(text)])
    }
}
