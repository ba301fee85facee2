//! Windows automation channel
//!
//! Drives Adobe Illustrator on Windows:
//!
//! - **Activation**: Win32 `EnumWindows` to find the first visible top-level
//!   window whose title contains the substring, then `SetForegroundWindow`
//! - **Scripting**: the `Illustrator.Application` COM object's
//!   `DoJavaScriptFile`, driven through a short-lived PowerShell process
//! - **Screen grab**: primary monitor capture via xcap
//!
//! Win32 and xcap calls block, so they run on the tokio blocking pool.
//!
//! # Examples
//!
//! ```rust,ignore
//! use illustrator_mcp::automation::{AutomationChannel, WindowsChannel};
//!
//! #[tokio::main]
//! async fn main() {
//!     let channel = WindowsChannel::new("Illustrator.Application".to_string());
//!     channel.activate_window("Adobe Illustrator").await.unwrap();
//!     let raster = channel.grab_screen().await.unwrap();
//!     println!("{:?}", raster.dimensions());
//! }
//! ```

use std::{ffi::OsString, os::windows::ffi::OsStringExt, path::Path, process::Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use windows_sys::Win32::{
    Foundation::HWND,
    UI::WindowsAndMessaging::{
        EnumWindows, GetWindowTextLengthW, GetWindowTextW, IsIconic, IsWindowVisible,
        SW_RESTORE, SetForegroundWindow, ShowWindow,
    },
};

use super::{AutomationChannel, ScreenRaster};
use crate::error::{AutomationError, AutomationResult};

/// Environment variable carrying the script path into the PowerShell host
const SCRIPT_PATH_ENV: &str = "ILLUSTRATOR_MCP_SCRIPT_PATH";

/// Environment variable carrying the COM ProgID into the PowerShell host
const PROG_ID_ENV: &str = "ILLUSTRATOR_MCP_PROG_ID";

/// PowerShell program that runs one script file through COM
///
/// Inputs come from the environment so paths never need quoting.
const DO_JAVASCRIPT_FILE: &str = "$ErrorActionPreference = 'Stop'; \
     $app = New-Object -ComObject $env:ILLUSTRATOR_MCP_PROG_ID; \
     $result = $app.DoJavaScriptFile($env:ILLUSTRATOR_MCP_SCRIPT_PATH); \
     if ($null -ne $result) { [Console]::Out.Write($result) }";

/// Windows automation channel using Win32, COM and xcap
#[derive(Debug, Clone)]
pub struct WindowsChannel {
    /// COM ProgID of the scripting host (e.g. "Illustrator.Application")
    prog_id: String,
}

impl WindowsChannel {
    /// Creates a channel targeting the given COM ProgID
    pub fn new(prog_id: String) -> Self {
        Self { prog_id }
    }

    /// Enumerates visible top-level windows as `(hwnd, title)` pairs
    fn visible_windows() -> Vec<(HWND, String)> {
        let mut handles: Vec<HWND> = Vec::new();

        unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: isize) -> i32 {
            // SAFETY: lparam is the &mut Vec<HWND> passed to EnumWindows below,
            // which outlives the enumeration.
            unsafe {
                let handles = &mut *(lparam as *mut Vec<HWND>);
                if IsWindowVisible(hwnd) != 0 && GetWindowTextLengthW(hwnd) > 0 {
                    handles.push(hwnd);
                }
            }
            1
        }

        // SAFETY: the callback only touches the vector behind lparam.
        unsafe {
            EnumWindows(Some(enum_callback), &mut handles as *mut Vec<HWND> as isize);
        }

        handles
            .into_iter()
            .map(|hwnd| (hwnd, Self::window_title(hwnd)))
            .filter(|(_, title)| !title.is_empty())
            .collect()
    }

    /// Reads a window title as UTF-16 and converts it lossily
    fn window_title(hwnd: HWND) -> String {
        // SAFETY: the buffer is sized from GetWindowTextLengthW and its length
        // is passed along, so GetWindowTextW cannot write past it.
        unsafe {
            let len = GetWindowTextLengthW(hwnd);
            if len <= 0 {
                return String::new();
            }

            let mut buffer: Vec<u16> = vec![0; (len + 1) as usize];
            let copied = GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32);
            if copied <= 0 {
                return String::new();
            }

            buffer.truncate(copied as usize);
            OsString::from_wide(&buffer).to_string_lossy().into_owned()
        }
    }

    /// Finds and foregrounds the first window whose title contains `needle`
    fn activate_sync(needle: &str) -> AutomationResult<()> {
        let (hwnd, title) = Self::visible_windows()
            .into_iter()
            .find(|(_, title)| title.contains(needle))
            .ok_or_else(|| AutomationError::WindowNotFound {
                title: needle.to_string(),
            })?;

        tracing::debug!("Activating window '{}'", title);

        // SAFETY: hwnd came from EnumWindows during this call.
        unsafe {
            if IsIconic(hwnd) != 0 {
                ShowWindow(hwnd, SW_RESTORE);
            }
            if SetForegroundWindow(hwnd) == 0 {
                // Windows refuses foreground changes from background processes;
                // the window is still restored, so carry on with the grab.
                tracing::warn!("SetForegroundWindow refused for '{}'", title);
            }
        }

        Ok(())
    }

    /// Grabs the primary monitor (or the first one if none is primary)
    fn grab_sync() -> AutomationResult<ScreenRaster> {
        let monitors = xcap::Monitor::all().map_err(|e| AutomationError::CaptureFailed {
            reason: format!("failed to enumerate monitors: {}", e),
        })?;

        let monitor = monitors
            .iter()
            .find(|m| m.is_primary().unwrap_or(false))
            .or_else(|| monitors.first())
            .ok_or_else(|| AutomationError::CaptureFailed {
                reason: "no monitors available".to_string(),
            })?;

        let image = monitor
            .capture_image()
            .map_err(|e| AutomationError::CaptureFailed {
                reason: e.to_string(),
            })?;

        tracing::debug!("Captured monitor at {}x{}", image.width(), image.height());
        Ok(ScreenRaster::from_rgba(image))
    }

    /// Runs a blocking closure on the blocking pool
    async fn blocking<F, T>(operation: &str, f: F) -> AutomationResult<T>
    where
        F: FnOnce() -> AutomationResult<T> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(f)
            .await
            .map_err(|e| {
                tracing::error!("{} task failed: {}", operation, e);
                AutomationError::TaskFailed {
                    operation: operation.to_string(),
                    reason:    e.to_string(),
                }
            })?
    }
}

#[async_trait]
impl AutomationChannel for WindowsChannel {
    async fn activate_window(&self, title_substring: &str) -> AutomationResult<()> {
        let needle = title_substring.to_string();
        Self::blocking("activate_window", move || Self::activate_sync(&needle)).await
    }

    async fn run_script_file(&self, path: &Path) -> AutomationResult<()> {
        tracing::debug!("DoJavaScriptFile via {} on {:?}", self.prog_id, path);

        let output = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command", DO_JAVASCRIPT_FILE])
            .env(PROG_ID_ENV, &self.prog_id)
            .env(SCRIPT_PATH_ENV, path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            tracing::debug!("Script returned: {}", stdout.trim());
        }

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("scripting host exited with {}", output.status),
                message => message.to_string(),
            };
            Err(AutomationError::ScriptFailed { reason })
        }
    }

    async fn grab_screen(&self) -> AutomationResult<ScreenRaster> {
        Self::blocking("grab_screen", Self::grab_sync).await
    }

    fn name(&self) -> &'static str {
        "windows"
    }
}
