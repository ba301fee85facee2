//! Action handlers for `view` and `run`
//!
//! Handlers sequence the automation channel calls for one tool and always
//! return a [`ToolResult`]. Automation failures are logged and reported as a
//! single text item; they never propagate to the dispatcher.

use std::{path::PathBuf, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::time::sleep;

use crate::{
    automation::AutomationChannel,
    config::BridgeConfig,
    error::{AutomationError, AutomationResult},
    model::{ToolCall, ToolResult},
    registry::ToolHandler,
    util::{
        encode::{JPEG_MIME_TYPE, encode_jpeg},
        temp_files::ScriptFile,
    },
};

/// Text returned when `run` is called without a string `code` argument
pub const NO_CODE_PROVIDED: &str = "No code provided";

/// Text returned when a script completed
pub const SCRIPT_EXECUTED: &str = "Script executed successfully";

/// Prefix of every failed `view` result
pub const CAPTURE_FAILED_PREFIX: &str = "Failed to capture screenshot";

/// Prefix of every failed `run` result
pub const SCRIPT_FAILED_PREFIX: &str = "Failed to execute script";

/// Settings for `view`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    /// Window title substring to activate
    pub window_title: String,
    /// Pause between activation and grab
    pub settle_delay: Duration,
    /// JPEG quality
    pub jpeg_quality: u8,
}

impl From<&BridgeConfig> for ViewSettings {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            window_title: config.window_title.clone(),
            settle_delay: config.settle_delay,
            jpeg_quality: config.jpeg_quality,
        }
    }
}

/// Settings for `run`
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptSettings {
    /// Directory receiving the temporary `.jsx` files
    pub script_dir: PathBuf,
}

impl From<&BridgeConfig> for ScriptSettings {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            script_dir: config.script_dir.clone(),
        }
    }
}

/// Screenshots the Illustrator window
///
/// Activates the window, waits for the settle delay, grabs the full primary
/// screen and returns it as one JPEG image item. Any failure becomes one text
/// item starting with "Failed to capture screenshot:".
pub async fn capture_view(channel: &dyn AutomationChannel, settings: &ViewSettings) -> ToolResult {
    tracing::info!("Starting screenshot capture for Illustrator");

    match try_capture(channel, settings).await {
        Ok(jpeg) => {
            tracing::info!("Screenshot captured successfully ({} bytes)", jpeg.len());
            ToolResult::image(&jpeg, JPEG_MIME_TYPE)
        }
        Err(e) => {
            report_failure(CAPTURE_FAILED_PREFIX, &e);
            ToolResult::text(format!("{}: {}", CAPTURE_FAILED_PREFIX, e))
        }
    }
}

async fn try_capture(
    channel: &dyn AutomationChannel,
    settings: &ViewSettings,
) -> AutomationResult<Vec<u8>> {
    channel.activate_window(&settings.window_title).await?;

    if !settings.settle_delay.is_zero() {
        sleep(settings.settle_delay).await;
    }

    let raster = channel.grab_screen().await?;
    let quality = settings.jpeg_quality;

    tokio::task::spawn_blocking(move || encode_jpeg(&raster, quality))
        .await
        .map_err(|e| AutomationError::TaskFailed {
            operation: "encode_jpeg".to_string(),
            reason:    e.to_string(),
        })?
}

/// Runs ExtendScript source in Illustrator
///
/// The source is written to a temporary `.jsx` file that exists only for the
/// duration of the dispatch. Returns "Script executed successfully" or one
/// text item starting with "Failed to execute script:".
pub async fn run_script(
    channel: &dyn AutomationChannel,
    code: &str,
    settings: &ScriptSettings,
) -> ToolResult {
    tracing::info!("Running ExtendScript code in Illustrator");

    match try_run(channel, code, settings).await {
        Ok(()) => {
            tracing::info!("ExtendScript executed successfully");
            ToolResult::text(SCRIPT_EXECUTED)
        }
        Err(e) => {
            report_failure(SCRIPT_FAILED_PREFIX, &e);
            ToolResult::text(format!("{}: {}", SCRIPT_FAILED_PREFIX, e))
        }
    }
}

async fn try_run(
    channel: &dyn AutomationChannel,
    code: &str,
    settings: &ScriptSettings,
) -> AutomationResult<()> {
    let script = ScriptFile::create(code, &settings.script_dir)?;
    let outcome = channel.run_script_file(script.path()).await;

    script.remove();
    tracing::debug!("Temporary ExtendScript file removed");

    outcome
}

fn report_failure(prefix: &str, error: &AutomationError) {
    tracing::error!("{}: {}", prefix, error);
    tracing::debug!("Hint: {}", error.remediation_hint());
}

/// `view` tool binding
pub struct ViewHandler {
    channel:  Arc<dyn AutomationChannel>,
    settings: ViewSettings,
}

impl ViewHandler {
    /// Creates the handler
    pub fn new(channel: Arc<dyn AutomationChannel>, settings: ViewSettings) -> Self {
        Self { channel, settings }
    }
}

#[async_trait]
impl ToolHandler for ViewHandler {
    async fn handle(&self, _call: &ToolCall) -> ToolResult {
        capture_view(self.channel.as_ref(), &self.settings).await
    }
}

/// `run` tool binding
pub struct RunHandler {
    channel:  Arc<dyn AutomationChannel>,
    settings: ScriptSettings,
}

impl RunHandler {
    /// Creates the handler
    pub fn new(channel: Arc<dyn AutomationChannel>, settings: ScriptSettings) -> Self {
        Self { channel, settings }
    }
}

#[async_trait]
impl ToolHandler for RunHandler {
    async fn handle(&self, call: &ToolCall) -> ToolResult {
        match call.string_argument("code") {
            Some(code) => run_script(self.channel.as_ref(), code, &self.settings).await,
            None => {
                tracing::warn!("run called without a string 'code' argument");
                ToolResult::text(NO_CODE_PROVIDED)
            }
        }
    }
}
