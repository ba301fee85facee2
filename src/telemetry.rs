//! Logging setup and per-call spans
//!
//! [`Telemetry`] is built once at startup and handed to the dispatcher.
//! Logs go to stderr because stdout carries the MCP stdio transport.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result, anyhow};
use tracing::Span;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{BridgeConfig, DEFAULT_LOG_FILTER, LogFormat};

/// Logging handle shared by the dispatcher
#[derive(Debug, Default)]
pub struct Telemetry {
    /// Id of the last call span handed out
    last_call_id: AtomicU64,
}

impl Telemetry {
    /// Installs the global subscriber described by `config`
    ///
    /// The filter comes from `--log-filter`, then `RUST_LOG`, then
    /// `illustrator_mcp=info`. Fails if a global subscriber is already set.
    pub fn init(config: &BridgeConfig) -> Result<Self> {
        let filter = match &config.log_filter {
            Some(directive) => EnvFilter::try_new(directive)
                .with_context(|| format!("invalid log filter '{}'", directive))?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        };

        let builder = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_line_number(false)
            .with_ansi(false);

        let installed = match config.log_format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        installed.map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

        Ok(Self::disabled())
    }

    /// Creates a handle without installing a subscriber
    ///
    /// Spans are still created; they go wherever the current subscriber
    /// sends them (nowhere, if none is installed).
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Opens the span for one tool call
    ///
    /// Call ids start at 1 and increase by one per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use illustrator_mcp::telemetry::Telemetry;
    ///
    /// let telemetry = Telemetry::disabled();
    /// let _span = telemetry.call_span("view");
    /// let _span = telemetry.call_span("run");
    /// assert_eq!(telemetry.calls_started(), 2);
    /// ```
    pub fn call_span(&self, tool: &str) -> Span {
        let call_id = self.last_call_id.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info_span!("tool_call", call_id, tool = %tool)
    }

    /// Number of call spans handed out so far
    pub fn calls_started(&self) -> u64 {
        self.last_call_id.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_ids_increase() {
        let telemetry = Telemetry::disabled();
        assert_eq!(telemetry.calls_started(), 0);

        for _ in 0..3 {
            let _span = telemetry.call_span("run");
        }
        assert_eq!(telemetry.calls_started(), 3);
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = BridgeConfig {
            log_filter: Some("illustrator_mcp=notalevel".to_string()),
            ..BridgeConfig::mock()
        };
        let err = Telemetry::init(&config).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }
}
