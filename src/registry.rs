//! Tool registry and dispatcher
//!
//! The registry is a fixed, ordered table of two tools:
//!
//! | Tool | Arguments | Handler |
//! |------|-----------|---------|
//! | `view` | none | [`ViewHandler`](crate::handlers::ViewHandler) |
//! | `run` | `code: string` (required) | [`RunHandler`](crate::handlers::RunHandler) |
//!
//! [`ToolDispatcher`] binds each descriptor to its handler once at startup
//! and routes calls by exact name. Calls are handled one at a time, never
//! batched or cached.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::json;
use tracing::Instrument;

use crate::{
    automation::AutomationChannel,
    config::BridgeConfig,
    error::DispatchError,
    handlers::{RunHandler, ScriptSettings, ViewHandler, ViewSettings},
    model::{ToolCall, ToolDescriptor, ToolResult},
    telemetry::Telemetry,
};

/// Name of the screenshot tool
pub const VIEW_TOOL: &str = "view";

/// Name of the script tool
pub const RUN_TOOL: &str = "run";

static TOOL_DESCRIPTORS: Lazy<[ToolDescriptor; 2]> = Lazy::new(|| {
    [
        ToolDescriptor::new(
            VIEW_TOOL,
            "View a screenshot of the Adobe Illustrator window",
            json!({"type": "object", "properties": {}}),
        ),
        ToolDescriptor::new(
            RUN_TOOL,
            "Run ExtendScript code in Illustrator",
            json!({
                "type": "object",
                "properties": {
                    "code": {"type": "string", "description": "ExtendScript code to execute."}
                },
                "required": ["code"]
            }),
        ),
    ]
});

/// Returns the advertised tools in registry order
pub fn tool_descriptors() -> &'static [ToolDescriptor] {
    &*TOOL_DESCRIPTORS
}

/// Handler bound to one registry entry
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Handles one call. Never fails; problems are reported in the result.
    async fn handle(&self, call: &ToolCall) -> ToolResult;
}

struct ToolBinding {
    descriptor: &'static ToolDescriptor,
    handler:    Box<dyn ToolHandler>,
}

/// Routes tool calls to their handlers
pub struct ToolDispatcher {
    bindings:  Vec<ToolBinding>,
    channel:   &'static str,
    telemetry: Arc<Telemetry>,
}

impl ToolDispatcher {
    /// Binds the registry to handlers using `channel` and `config`
    pub fn new(
        channel: Arc<dyn AutomationChannel>,
        config: &BridgeConfig,
        telemetry: Arc<Telemetry>,
    ) -> Self {
        let [view, run] = &*TOOL_DESCRIPTORS;
        let channel_name = channel.name();

        let bindings = vec![
            ToolBinding {
                descriptor: view,
                handler:    Box::new(ViewHandler::new(channel.clone(), ViewSettings::from(config))),
            },
            ToolBinding {
                descriptor: run,
                handler:    Box::new(RunHandler::new(channel, ScriptSettings::from(config))),
            },
        ];

        Self {
            bindings,
            channel: channel_name,
            telemetry,
        }
    }

    /// Returns the advertised tools in registry order
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        tracing::info!("Listing available tools");
        self.bindings
            .iter()
            .map(|binding| binding.descriptor.clone())
            .collect()
    }

    /// Name of the automation channel behind the handlers
    pub fn channel_name(&self) -> &'static str {
        self.channel
    }

    /// Dispatches one call by exact tool name
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownTool` if no tool has this name. No
    /// handler runs in that case.
    pub async fn dispatch(&self, call: ToolCall) -> Result<ToolResult, DispatchError> {
        let span = self.telemetry.call_span(&call.name);

        async move {
            let Some(binding) = self
                .bindings
                .iter()
                .find(|binding| binding.descriptor.name == call.name)
            else {
                tracing::warn!("Unknown tool: {}", call.name);
                return Err(DispatchError::UnknownTool { name: call.name });
            };

            tracing::info!("Calling tool '{}' via {} channel", call.name, self.channel);
            let result = binding.handler.handle(&call).await;
            tracing::debug!("Tool '{}' returned {} item(s)", call.name, result.items().len());

            Ok(result)
        }
        .instrument(span)
        .await
    }
}
