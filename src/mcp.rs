//! MCP service implementation
//!
//! [`IllustratorMcpServer`] adapts the [`ToolDispatcher`] to rmcp's
//! `ServerHandler`: it advertises the registry on `tools/list`, forwards
//! `tools/call` to the dispatcher, and carries the Illustrator system prompt
//! as server instructions.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
};

use crate::{
    automation::{AutomationChannel, MockChannel},
    config::BridgeConfig,
    error::DispatchError,
    prompt,
    registry::ToolDispatcher,
    telemetry::Telemetry,
    util::mcp_content::{build_call_result, build_tool, tool_call_from_request},
};

/// Server name reported during initialization
pub const SERVER_NAME: &str = "illustrator";

/// Illustrator MCP server
#[derive(Clone)]
pub struct IllustratorMcpServer {
    dispatcher: Arc<ToolDispatcher>,
}

impl IllustratorMcpServer {
    /// Creates a server around an existing dispatcher
    pub fn new(dispatcher: Arc<ToolDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Creates a server for `channel` and `config`
    pub fn from_channel(
        channel: Arc<dyn AutomationChannel>,
        config: &BridgeConfig,
        telemetry: Arc<Telemetry>,
    ) -> Self {
        Self::new(Arc::new(ToolDispatcher::new(channel, config, telemetry)))
    }

    /// Creates a server backed by a fresh [`MockChannel`]
    ///
    /// # Examples
    ///
    /// ```
    /// use illustrator_mcp::mcp::IllustratorMcpServer;
    ///
    /// let server = IllustratorMcpServer::new_with_mock();
    /// assert_eq!(server.tools().len(), 2);
    /// ```
    pub fn new_with_mock() -> Self {
        Self::from_channel(
            Arc::new(MockChannel::new()),
            &BridgeConfig::mock(),
            Arc::new(Telemetry::disabled()),
        )
    }

    /// Tools advertised on `tools/list`
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.list_tools().iter().map(build_tool).collect()
    }

    /// Handles one `tools/call` request
    ///
    /// Unknown tools become an `invalid_params` protocol error; every other
    /// outcome is a successful result with text or image content.
    pub async fn execute(&self, request: CallToolRequestParam) -> Result<CallToolResult, McpError> {
        let call = tool_call_from_request(request);

        match self.dispatcher.dispatch(call).await {
            Ok(result) => Ok(build_call_result(result)),
            Err(e @ DispatchError::UnknownTool { .. }) => Err(McpError::invalid_params(e.to_string(), None)),
        }
    }
}

impl ServerHandler for IllustratorMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(prompt::system_prompt().to_string()),
            ..Default::default()
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.execute(request).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }
}

/// Resolves once `signal` reports a shutdown request
///
/// A signal that fails to install never resolves, so the server keeps
/// running until the client closes the stream.
pub async fn shutdown_requested<F, E>(signal: F)
where
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    match signal.await {
        Ok(()) => tracing::info!("Received Ctrl-C"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
