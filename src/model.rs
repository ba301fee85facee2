//! Data models for the tool-dispatch bridge
//!
//! This module defines the protocol-neutral types that flow through the
//! dispatcher:
//! - Tool descriptors advertised to the caller
//! - Inbound tool calls
//! - Tool results made of self-describing content items
//!
//! The serde representation of [`ContentItem`] matches the MCP content wire
//! shape, so a [`ToolResult`] serializes to exactly what the caller receives.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object used for tool arguments and input schemas
pub type JsonObject = Map<String, Value>;

/// Static description of a callable tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Tool name used in calls
    pub name:         String,
    /// Human-readable description shown to the caller
    pub description:  String,
    /// JSON-schema-like description of the accepted arguments
    pub input_schema: JsonObject,
}

impl ToolDescriptor {
    /// Creates a descriptor from a name, description and schema value
    ///
    /// # Panics
    ///
    /// Panics if `schema` is not a JSON object. Schemas are static literals.
    #[track_caller]
    pub fn new(name: impl Into<String>, description: impl Into<String>, schema: Value) -> Self {
        let Value::Object(input_schema) = schema else {
            panic!("tool input schema must be a JSON object, got {}", schema);
        };

        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// One inbound remote call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the requested tool
    pub name:      String,
    /// Optional argument mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<JsonObject>,
}

impl ToolCall {
    /// Creates a call without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            arguments: None,
        }
    }

    /// Creates a call with the given argument value
    ///
    /// Non-object values are treated as absent arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use illustrator_mcp::model::ToolCall;
    ///
    /// let call = ToolCall::with_arguments("run", serde_json::json!({"code": "alert(1);"}));
    /// assert_eq!(call.string_argument("code"), Some("alert(1);"));
    /// ```
    pub fn with_arguments(name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => Some(map),
            _ => None,
        };
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Returns the argument `key` if present and holding a string
    pub fn string_argument(&self, key: &str) -> Option<&str> {
        self.arguments.as_ref()?.get(key)?.as_str()
    }
}

/// One unit of a tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// Plain text
    Text {
        /// Text payload
        text: String,
    },
    /// Encoded image
    Image {
        /// MIME type of the encoded bytes (e.g. "image/jpeg")
        #[serde(rename = "mimeType")]
        mime_type: String,
        /// Base64 text of the encoded bytes
        data:      String,
    },
}

impl ContentItem {
    /// Creates a text item
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    /// Creates an image item by base64-encoding raw image bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use illustrator_mcp::model::ContentItem;
    ///
    /// let item = ContentItem::image(&[0xff, 0xd8, 0xff], "image/jpeg");
    /// assert_eq!(item.as_image(), Some(("image/jpeg", "/9j/")));
    /// ```
    pub fn image(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        ContentItem::Image {
            mime_type: mime_type.into(),
            data:      STANDARD.encode(bytes),
        }
    }

    /// Returns the text payload if this is a text item
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentItem::Text { text } => Some(text),
            ContentItem::Image { .. } => None,
        }
    }

    /// Returns `(mime_type, base64_data)` if this is an image item
    pub fn as_image(&self) -> Option<(&str, &str)> {
        match self {
            ContentItem::Image { mime_type, data } => Some((mime_type, data)),
            ContentItem::Text { .. } => None,
        }
    }
}

/// Result of one tool call
///
/// A result always holds at least one item; the only constructors take a
/// first item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolResult {
    items: Vec<ContentItem>,
}

impl ToolResult {
    /// Creates a result holding a single item
    pub fn single(item: ContentItem) -> Self {
        Self { items: vec![item] }
    }

    /// Creates a single-text result
    pub fn text(text: impl Into<String>) -> Self {
        Self::single(ContentItem::text(text))
    }

    /// Creates a single-image result from raw encoded bytes
    pub fn image(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::single(ContentItem::image(bytes, mime_type))
    }

    /// Returns the content items in order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Consumes the result and returns its items
    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }

    /// Returns the first text payload, if any
    pub fn first_text(&self) -> Option<&str> {
        self.items.iter().find_map(ContentItem::as_text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_text_item_wire_shape() {
        let item = ContentItem::text("Script executed successfully");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "Script executed successfully"}));
    }

    #[test]
    fn test_image_item_wire_shape() {
        let item = ContentItem::image(b"abc", "image/jpeg");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"type": "image", "mimeType": "image/jpeg", "data": "YWJj"}));
    }

    #[test]
    fn test_image_item_deserializes_from_wire() {
        let item: ContentItem =
            serde_json::from_str(r#"{"type":"image","mimeType":"image/jpeg","data":"YWJj"}"#)
                .unwrap();
        assert_eq!(item.as_image(), Some(("image/jpeg", "YWJj")));
        assert!(item.as_text().is_none());
    }

    #[test]
    fn test_tool_result_serializes_as_array() {
        let result = ToolResult::text("No code provided");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!([{"type": "text", "text": "No code provided"}]));
    }

    #[test]
    fn test_tool_result_is_never_empty() {
        let result = ToolResult::image(&[1, 2, 3], "image/jpeg");
        assert_eq!(result.items().len(), 1);
        assert!(result.first_text().is_none());
        assert_eq!(result.into_items().len(), 1);
    }

    #[test]
    fn test_tool_call_string_argument() {
        let call = ToolCall::with_arguments("run", json!({"code": "app.documents.add();"}));
        assert_eq!(call.string_argument("code"), Some("app.documents.add();"));
        assert_eq!(call.string_argument("missing"), None);

        let numeric = ToolCall::with_arguments("run", json!({"code": 42}));
        assert_eq!(numeric.string_argument("code"), None);

        let bare = ToolCall::new("run");
        assert_eq!(bare.string_argument("code"), None);
    }

    #[test]
    fn test_tool_call_non_object_arguments_are_absent() {
        let call = ToolCall::with_arguments("view", json!("not an object"));
        assert!(call.arguments.is_none());
    }

    #[test]
    fn test_tool_call_deserialization_with_null_arguments() {
        let call: ToolCall = serde_json::from_str(r#"{"name":"view","arguments":null}"#).unwrap();
        assert_eq!(call.name, "view");
        assert!(call.arguments.is_none());
    }

    #[test]
    fn test_descriptor_serialization_uses_camel_case() {
        let descriptor =
            ToolDescriptor::new("view", "View a screenshot", json!({"type": "object"}));
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["inputSchema"], json!({"type": "object"}));
    }

    #[test]
    #[should_panic(expected = "tool input schema must be a JSON object")]
    fn test_descriptor_rejects_non_object_schema() {
        ToolDescriptor::new("view", "View", json!(null));
    }
}
