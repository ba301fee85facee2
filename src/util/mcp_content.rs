//! Conversions between bridge types and MCP protocol types
//!
//! The registry and handlers work with [`crate::model`] types only; this
//! module is the single place where they meet `rmcp::model`.

use std::sync::Arc;

use rmcp::model::{CallToolRequestParam, CallToolResult, Content, Tool};

use crate::model::{ContentItem, ToolCall, ToolDescriptor, ToolResult};

/// Builds MCP content from one result item
///
/// Image data is already base64 text and is passed through unchanged.
///
/// # Examples
///
/// ```
/// use illustrator_mcp::{model::ContentItem, util::mcp_content::build_content};
///
/// let content = build_content(ContentItem::text("Script executed successfully"));
/// assert!(content.as_text().is_some());
/// ```
pub fn build_content(item: ContentItem) -> Content {
    match item {
        ContentItem::Text { text } => Content::text(text),
        ContentItem::Image { mime_type, data } => Content::image(data, mime_type),
    }
}

/// Builds a successful MCP call result from a tool result
///
/// Handler-level failures are reported as text items, so the protocol
/// result is never flagged as an error.
pub fn build_call_result(result: ToolResult) -> CallToolResult {
    CallToolResult::success(result.into_items().into_iter().map(build_content).collect())
}

/// Builds an MCP tool advertisement from a descriptor
pub fn build_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool::new(
        descriptor.name.clone(),
        descriptor.description.clone(),
        Arc::new(descriptor.input_schema.clone()),
    )
}

/// Converts an MCP call request into a bridge call
pub fn tool_call_from_request(request: CallToolRequestParam) -> ToolCall {
    ToolCall {
        name:      request.name.into_owned(),
        arguments: request.arguments,
    }
}
