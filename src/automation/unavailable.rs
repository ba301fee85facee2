//! Channel for platforms without Illustrator automation
//!
//! Every operation fails with `BackendNotAvailable`, which the handlers report
//! as ordinary text results. The server therefore still starts and answers
//! tool calls.

use std::path::Path;

use async_trait::async_trait;

use super::{AutomationChannel, ScreenRaster};
use crate::error::{AutomationError, AutomationResult};

/// Automation channel that rejects every call
#[derive(Debug, Clone)]
pub struct UnavailableChannel {
    platform: String,
}

impl UnavailableChannel {
    /// Creates a channel reporting the given platform name
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }

    /// Creates a channel reporting `std::env::consts::OS`
    pub fn for_current_platform() -> Self {
        Self::new(std::env::consts::OS)
    }

    fn unavailable(&self) -> AutomationError {
        AutomationError::BackendNotAvailable {
            platform: self.platform.clone(),
        }
    }
}

#[async_trait]
impl AutomationChannel for UnavailableChannel {
    async fn activate_window(&self, title_substring: &str) -> AutomationResult<()> {
        tracing::debug!("activate_window('{}') rejected: no automation backend", title_substring);
        Err(self.unavailable())
    }

    async fn run_script_file(&self, path: &Path) -> AutomationResult<()> {
        tracing::debug!("run_script_file({:?}) rejected: no automation backend", path);
        Err(self.unavailable())
    }

    async fn grab_screen(&self) -> AutomationResult<ScreenRaster> {
        Err(self.unavailable())
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
