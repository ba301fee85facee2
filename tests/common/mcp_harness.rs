//! MCP Server Test Harness
//!
//! Provides reusable fixtures for exercising the Illustrator MCP server
//! against the mock automation channel, with an isolated script directory
//! per test.
//!
//! # Usage
//!
//! ```rust
//! use common::mcp_harness::{BridgeTestContext, ContentValidator};
//!
//! #[tokio::test]
//! async fn test_view() {
//!     let ctx = BridgeTestContext::new_with_mock();
//!     let result = ctx.view().await.unwrap();
//!     let jpeg = ContentValidator::validate_jpeg_image(&result).unwrap();
//!     assert!(ContentValidator::is_valid_jpeg(&jpeg));
//! }
//! ```

#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use base64::{Engine, engine::general_purpose::STANDARD};
use illustrator_mcp::{
    automation::{AutomationChannel, MockChannel},
    config::BridgeConfig,
    mcp::IllustratorMcpServer,
    telemetry::Telemetry,
};
use rmcp::model::{CallToolRequestParam, CallToolResult, ErrorData};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Test fixture wrapping an `IllustratorMcpServer`
///
/// Owns the script directory so tests can check that no `.jsx` file outlives
/// a call. The directory is removed when the context is dropped.
pub struct BridgeTestContext {
    /// The MCP server instance
    pub server:  IllustratorMcpServer,
    /// Mock channel behind the server (None for live channels)
    pub channel: Option<Arc<MockChannel>>,
    script_dir:  TempDir,
}

impl BridgeTestContext {
    /// Create a context with a default mock (one Illustrator window, 1920x1080)
    pub fn new_with_mock() -> Self {
        Self::new_with_configured_mock(MockChannel::new())
    }

    /// Create a context with a configured mock
    ///
    /// Use this to inject failures, delays, or a custom window list.
    pub fn new_with_configured_mock(mock: MockChannel) -> Self {
        let mock = Arc::new(mock);
        let channel: Arc<dyn AutomationChannel> = mock.clone();
        let mut ctx = Self::with_channel(channel);
        ctx.channel = Some(mock);
        ctx
    }

    /// Create a context around any channel
    pub fn with_channel(channel: Arc<dyn AutomationChannel>) -> Self {
        let script_dir = tempfile::tempdir().expect("temp script dir should be created");
        let config = BridgeConfig {
            script_dir: script_dir.path().to_path_buf(),
            ..BridgeConfig::mock()
        };
        let server =
            IllustratorMcpServer::from_channel(channel, &config, Arc::new(Telemetry::disabled()));
        Self {
            server,
            channel: None,
            script_dir,
        }
    }

    // --- Tool invocation helpers ---

    /// Calls a tool with raw JSON arguments (`Value::Null` for none)
    pub async fn call(&self, name: &str, arguments: Value) -> Result<CallToolResult, ErrorData> {
        let request: CallToolRequestParam = serde_json::from_value(json!({
            "name": name,
            "arguments": arguments,
        }))
        .expect("request should deserialize");
        self.server.execute(request).await
    }

    /// Calls `view` with empty arguments
    pub async fn view(&self) -> Result<CallToolResult, ErrorData> {
        self.call("view", json!({})).await
    }

    /// Calls `run` with the given code
    pub async fn run(&self, code: &str) -> Result<CallToolResult, ErrorData> {
        self.call("run", json!({ "code": code })).await
    }

    // --- Script file inspection ---

    /// Files currently present in the script directory
    pub fn leftover_scripts(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.script_dir.path())
            .expect("script dir should be readable")
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect()
    }

    /// Path of the script directory
    pub fn script_dir(&self) -> PathBuf {
        self.script_dir.path().to_path_buf()
    }

    /// The mock channel (panics for live contexts)
    pub fn mock(&self) -> &MockChannel {
        self.channel.as_deref().expect("context should use a mock channel")
    }
}

/// Validates MCP content returned by the server
pub struct ContentValidator;

impl ContentValidator {
    /// Extracts the single text item of a result
    ///
    /// # Returns
    /// - `Ok(String)` - the text
    /// - `Err(String)` - description of what failed
    pub fn validate_single_text(result: &CallToolResult) -> Result<String, String> {
        if result.is_error.unwrap_or(false) {
            return Err("Result is marked as error".to_string());
        }
        if result.content.len() != 1 {
            return Err(format!("Expected 1 content item, got {}", result.content.len()));
        }
        result.content[0]
            .as_text()
            .map(|text| text.text.clone())
            .ok_or_else(|| "Content is not text".to_string())
    }

    /// Decodes the single JPEG image item of a result
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - decoded JPEG bytes
    /// - `Err(String)` - description of what failed
    pub fn validate_jpeg_image(result: &CallToolResult) -> Result<Vec<u8>, String> {
        if result.content.len() != 1 {
            return Err(format!("Expected 1 content item, got {}", result.content.len()));
        }
        let image = result.content[0]
            .as_image()
            .ok_or_else(|| "Content is not an image".to_string())?;

        if image.mime_type != "image/jpeg" {
            return Err(format!("Expected MIME type 'image/jpeg', got '{}'", image.mime_type));
        }

        let bytes = STANDARD
            .decode(&image.data)
            .map_err(|e| format!("Invalid base64: {}", e))?;

        if !Self::is_valid_jpeg(&bytes) {
            return Err("Decoded bytes are not a JPEG".to_string());
        }
        Ok(bytes)
    }

    /// Checks the JPEG SOI marker
    pub fn is_valid_jpeg(bytes: &[u8]) -> bool {
        bytes.len() > 3 && bytes[0] == 0xFF && bytes[1] == 0xD8 && bytes[2] == 0xFF
    }
}
