//! Mock automation channel for testing
//!
//! `MockChannel` implements [`AutomationChannel`] without a desktop or an
//! Illustrator installation. It keeps a list of pretend window titles,
//! returns a synthetic screen for grabs, and records every call so tests can
//! assert on what the handlers did.
//!
//! # Features
//!
//! - **Window list:** `activate_window` succeeds only if a title contains the
//!   requested substring (default window: "Adobe Illustrator 2025")
//! - **Script inspection:** `run_script_file` records whether the file existed
//!   and its content at dispatch time
//! - **Failure injection:** make one operation fail with a given reason
//! - **Configurable delay:** simulate a slow application
//!
//! # Examples
//!
//! ```
//! use illustrator_mcp::automation::{AutomationChannel, MockChannel, MockOperation};
//!
//! #[tokio::main]
//! async fn main() {
//!     let channel = MockChannel::new().with_failure(MockOperation::GrabScreen, "denied");
//!
//!     channel.activate_window("Adobe Illustrator").await.unwrap();
//!     assert!(channel.grab_screen().await.is_err());
//!     assert_eq!(channel.call_count(), 2);
//! }
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::sleep;

use super::{AutomationChannel, ScreenRaster};
use crate::error::{AutomationError, AutomationResult};

/// Operation of the automation surface, used for failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOperation {
    /// `activate_window`
    Activate,
    /// `run_script_file`
    RunScript,
    /// `grab_screen`
    GrabScreen,
}

impl MockOperation {
    fn error(self, reason: &str) -> AutomationError {
        match self {
            MockOperation::Activate => AutomationError::TaskFailed {
                operation: "activate_window".to_string(),
                reason:    reason.to_string(),
            },
            MockOperation::RunScript => AutomationError::ScriptFailed {
                reason: reason.to_string(),
            },
            MockOperation::GrabScreen => AutomationError::CaptureFailed {
                reason: reason.to_string(),
            },
        }
    }
}

/// One recorded call on the mock channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelCall {
    /// `activate_window(title)`
    Activate {
        /// Requested title substring
        title: String,
    },
    /// `run_script_file(path)`
    RunScript {
        /// Path passed to the channel
        path:     PathBuf,
        /// Whether the file existed when the call was made
        existed:  bool,
        /// File content at call time (if readable as UTF-8)
        contents: Option<String>,
    },
    /// `grab_screen()`
    GrabScreen,
}

/// In-memory automation channel
#[derive(Debug)]
pub struct MockChannel {
    /// Titles of the pretend top-level windows
    windows:    Vec<String>,
    /// Size of the synthetic screen
    screen:     (u32, u32),
    /// Optional delay applied to every operation
    delay:      Option<Duration>,
    /// Operation that fails, with its reason
    failure:    Option<(MockOperation, String)>,
    /// Calls in arrival order
    calls:      Mutex<Vec<ChannelCall>>,
}

impl MockChannel {
    /// Creates a mock with one Illustrator window and a 1920x1080 screen
    pub fn new() -> Self {
        Self {
            windows: vec!["Adobe Illustrator 2025".to_string()],
            screen:  (1920, 1080),
            delay:   None,
            failure: None,
            calls:   Mutex::new(Vec::new()),
        }
    }

    /// Replaces the list of pretend window titles
    pub fn with_windows<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.windows = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Removes every pretend window, so activation fails with `WindowNotFound`
    pub fn without_windows(mut self) -> Self {
        self.windows.clear();
        self
    }

    /// Sets the synthetic screen size
    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen = (width, height);
        self
    }

    /// Sleeps for `delay` before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Makes `operation` fail with `reason`
    pub fn with_failure(mut self, operation: MockOperation, reason: impl Into<String>) -> Self {
        self.failure = Some((operation, reason.into()));
        self
    }

    /// Returns a snapshot of the recorded calls
    pub fn calls(&self) -> Vec<ChannelCall> {
        self.calls.lock().clone()
    }

    /// Number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Paths passed to `run_script_file`, in order
    pub fn script_paths(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                ChannelCall::RunScript { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    async fn simulate(&self, operation: MockOperation, call: ChannelCall) -> AutomationResult<()> {
        self.calls.lock().push(call);

        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        match &self.failure {
            Some((failing, reason)) if *failing == operation => Err(operation.error(reason)),
            _ => Ok(()),
        }
    }
}

impl Default for MockChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AutomationChannel for MockChannel {
    async fn activate_window(&self, title_substring: &str) -> AutomationResult<()> {
        let call = ChannelCall::Activate {
            title: title_substring.to_string(),
        };
        self.simulate(MockOperation::Activate, call).await?;

        if self.windows.iter().any(|title| title.contains(title_substring)) {
            tracing::debug!("mock: activated window matching '{}'", title_substring);
            Ok(())
        } else {
            Err(AutomationError::WindowNotFound {
                title: title_substring.to_string(),
            })
        }
    }

    async fn run_script_file(&self, path: &Path) -> AutomationResult<()> {
        let call = ChannelCall::RunScript {
            path:     path.to_path_buf(),
            existed:  path.exists(),
            contents: std::fs::read_to_string(path).ok(),
        };
        self.simulate(MockOperation::RunScript, call).await
    }

    async fn grab_screen(&self) -> AutomationResult<ScreenRaster> {
        self.simulate(MockOperation::GrabScreen, ChannelCall::GrabScreen)
            .await?;
        Ok(ScreenRaster::from_test_pattern(self.screen.0, self.screen.1))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
