//! Automation channel adapters
//!
//! An [`AutomationChannel`] is the narrow shim between the action handlers
//! and the OS-level interfaces that control the target application:
//!
//! - [`activate_window`](AutomationChannel::activate_window) - bring the
//!   application's top-level window to the foreground
//! - [`run_script_file`](AutomationChannel::run_script_file) - ask the
//!   application to execute a script file
//! - [`grab_screen`](AutomationChannel::grab_screen) - capture the full screen
//!
//! Channels return raw results or an [`AutomationError`](crate::error::AutomationError).
//! They never turn errors into tool results and never retry; that belongs to
//! the handlers.
//!
//! ## Channels
//!
//! | Channel | Platform | activate | run script | grab |
//! |---------|----------|----------|------------|------|
//! | [`WindowsChannel`] | Windows | Win32 | COM via PowerShell | xcap |
//! | [`UnavailableChannel`] | other | error | error | error |
//! | [`MockChannel`] | any | recorded | recorded | test pattern |

use std::{path::Path, sync::Arc};

use async_trait::async_trait;

use crate::{
    config::{BackendKind, BridgeConfig},
    error::AutomationResult,
};

pub mod mock;
pub mod raster;
pub mod unavailable;

#[cfg(target_os = "windows")]
pub mod windows_backend;

pub use mock::{ChannelCall, MockChannel, MockOperation};
pub use raster::ScreenRaster;
pub use unavailable::UnavailableChannel;
#[cfg(target_os = "windows")]
pub use windows_backend::WindowsChannel;

/// OS-level automation surface of the target application
#[async_trait]
pub trait AutomationChannel: Send + Sync {
    /// Brings the first top-level window whose title contains
    /// `title_substring` to the foreground.
    async fn activate_window(&self, title_substring: &str) -> AutomationResult<()>;

    /// Asks the application's scripting engine to execute the file at `path`.
    ///
    /// Returns once the application reports completion.
    async fn run_script_file(&self, path: &Path) -> AutomationResult<()>;

    /// Captures the entire primary screen.
    async fn grab_screen(&self) -> AutomationResult<ScreenRaster>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Creates the automation channel selected by the configuration.
///
/// - `BackendKind::Mock` always yields a [`MockChannel`]
/// - `BackendKind::Native` yields [`WindowsChannel`] on Windows and
///   [`UnavailableChannel`] elsewhere
pub fn create_channel(config: &BridgeConfig) -> Arc<dyn AutomationChannel> {
    match config.backend {
        BackendKind::Mock => Arc::new(MockChannel::new()),
        BackendKind::Native => native_channel(config),
    }
}

#[cfg(target_os = "windows")]
fn native_channel(config: &BridgeConfig) -> Arc<dyn AutomationChannel> {
    Arc::new(WindowsChannel::new(config.prog_id.clone()))
}

#[cfg(not(target_os = "windows"))]
fn native_channel(_config: &BridgeConfig) -> Arc<dyn AutomationChannel> {
    Arc::new(UnavailableChannel::for_current_platform())
}
