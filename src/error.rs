//! Error types for the Illustrator bridge
//!
//! Automation errors are produced by the channel adapters and are always
//! recovered by the action handlers, which turn them into text results.
//! Dispatch errors are the only failures that reach the protocol layer.

/// Result type alias for automation channel operations
pub type AutomationResult<T> = Result<T, AutomationError>;

/// Failure reported by an automation channel
///
/// Each variant carries enough context to be embedded verbatim in the text
/// result returned to the caller, and `remediation_hint()` provides an
/// operator-facing next step for the logs.
#[derive(Debug, thiserror::Error)]
pub enum AutomationError {
    /// No top-level window title contained the requested substring
    #[error("no window found with title containing '{title}'")]
    WindowNotFound {
        /// Title substring that failed to match
        title: String,
    },

    /// The target application rejected or failed to run the script
    #[error("script execution failed: {reason}")]
    ScriptFailed {
        /// Message reported by the scripting host
        reason: String,
    },

    /// The screen raster could not be grabbed
    #[error("screen capture failed: {reason}")]
    CaptureFailed {
        /// Message reported by the capture library
        reason: String,
    },

    /// The captured raster could not be encoded
    #[error("failed to encode image as {format}: {reason}")]
    EncodingFailed {
        /// Target image format
        format: String,
        /// Encoder error message
        reason: String,
    },

    /// No automation channel exists for this platform
    #[error("automation is not available on {platform}")]
    BackendNotAvailable {
        /// Platform the server is running on
        platform: String,
    },

    /// A blocking automation task panicked or was cancelled
    #[error("{operation} task failed: {reason}")]
    TaskFailed {
        /// Operation that was running on the blocking pool
        operation: String,
        /// Join error message
        reason: String,
    },

    /// I/O error while preparing or dispatching a call
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AutomationError {
    /// Returns an actionable remediation hint for this error
    ///
    /// # Examples
    ///
    /// ```
    /// use illustrator_mcp::error::AutomationError;
    ///
    /// let error = AutomationError::WindowNotFound {
    ///     title: "Adobe Illustrator".to_string(),
    /// };
    /// assert!(error.remediation_hint().contains("running"));
    /// ```
    pub fn remediation_hint(&self) -> &str {
        match self {
            AutomationError::WindowNotFound { .. } => {
                "Make sure Adobe Illustrator is running and its main window is open. Use \
                 --window-title if the window title differs from the default."
            }
            AutomationError::ScriptFailed { .. } => {
                "Check the ExtendScript source for errors and confirm a document is open if the \
                 script relies on app.activeDocument."
            }
            AutomationError::CaptureFailed { .. } => {
                "Screen capture requires an interactive desktop session. Services and locked \
                 sessions cannot grab the screen."
            }
            AutomationError::EncodingFailed { .. } => {
                "The captured screen could not be encoded. Try a different --jpeg-quality value."
            }
            AutomationError::BackendNotAvailable { .. } => {
                "Illustrator automation is only available on Windows. Use --backend mock to \
                 exercise the server elsewhere."
            }
            AutomationError::TaskFailed { .. } => {
                "An automation task was interrupted. Retry the call; if it keeps failing, restart \
                 the server."
            }
            AutomationError::Io(_) => {
                "An I/O error occurred. Check permissions and free space in the script directory."
            }
        }
    }
}

/// Call-level failure surfaced to the protocol layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The call named a tool that is not in the registry
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// Name supplied by the caller
        name: String,
    },
}

/// Invalid server configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// JPEG quality outside 1..=100
    #[error("JPEG quality must be between 1 and 100, got {0}")]
    InvalidQuality(u8),

    /// Window title substring is empty
    #[error("window title must not be empty")]
    EmptyWindowTitle,
}

/// Prompt template lookup or formatting failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// No template with this name exists
    #[error("Template '{0}' not found")]
    UnknownTemplate(String),

    /// A placeholder had no value in the supplied parameters
    #[error("Missing required parameter: '{0}'")]
    MissingParameter(String),
}
