//! Server configuration
//!
//! Command-line arguments (with `ILLUSTRATOR_MCP_*` environment fallbacks)
//! are parsed into [`ServerArgs`] and converted into a [`BridgeConfig`],
//! which is validated once at startup and then shared read-only.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::{error::ConfigError, util::temp_files::default_script_dir};

/// Default title substring of the Illustrator main window
pub const DEFAULT_WINDOW_TITLE: &str = "Adobe Illustrator";

/// Default COM ProgID of the Illustrator scripting host
pub const DEFAULT_PROG_ID: &str = "Illustrator.Application";

/// Default pause between window activation and the screen grab
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Default JPEG quality for `view` screenshots
pub const DEFAULT_JPEG_QUALITY: u8 = 50;

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "illustrator_mcp=info";

/// Automation backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BackendKind {
    /// Native channel for the current platform
    #[default]
    Native,
    /// In-memory mock channel (no desktop required)
    Mock,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Automation backend
    pub backend:       BackendKind,
    /// Substring matched against top-level window titles
    pub window_title:  String,
    /// COM ProgID used for script dispatch
    pub prog_id:       String,
    /// Pause between activation and screen grab
    pub settle_delay:  Duration,
    /// JPEG quality (1-100)
    pub jpeg_quality:  u8,
    /// Directory that receives temporary `.jsx` files
    pub script_dir:    PathBuf,
    /// Log output format
    pub log_format:    LogFormat,
    /// Explicit tracing filter; `None` defers to `RUST_LOG`
    pub log_filter:    Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            backend:      BackendKind::Native,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            prog_id:      DEFAULT_PROG_ID.to_string(),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            script_dir:   default_script_dir(),
            log_format:   LogFormat::Text,
            log_filter:   None,
        }
    }
}

impl BridgeConfig {
    /// Checks value ranges
    ///
    /// # Examples
    ///
    /// ```
    /// use illustrator_mcp::config::BridgeConfig;
    ///
    /// let mut config = BridgeConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.jpeg_quality = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::InvalidQuality(self.jpeg_quality));
        }
        if self.window_title.trim().is_empty() {
            return Err(ConfigError::EmptyWindowTitle);
        }
        Ok(())
    }

    /// Configuration for tests and `--backend mock`: no settle delay
    pub fn mock() -> Self {
        Self {
            backend: BackendKind::Mock,
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Command-line arguments of the `illustrator-mcp` server
#[derive(Debug, Clone, Parser)]
#[command(
    name = "illustrator-mcp",
    version,
    about = "MCP server exposing Adobe Illustrator screenshots and ExtendScript execution"
)]
pub struct ServerArgs {
    /// Automation backend
    #[arg(long, value_enum, env = "ILLUSTRATOR_MCP_BACKEND", default_value_t = BackendKind::Native)]
    pub backend: BackendKind,

    /// Substring of the Illustrator window title
    #[arg(long, env = "ILLUSTRATOR_MCP_WINDOW_TITLE", default_value = DEFAULT_WINDOW_TITLE)]
    pub window_title: String,

    /// COM ProgID of the scripting host
    #[arg(long, env = "ILLUSTRATOR_MCP_PROG_ID", default_value = DEFAULT_PROG_ID)]
    pub prog_id: String,

    /// Milliseconds to wait after activating the window before the grab
    #[arg(long, env = "ILLUSTRATOR_MCP_SETTLE_DELAY_MS", default_value_t = DEFAULT_SETTLE_DELAY_MS)]
    pub settle_delay_ms: u64,

    /// JPEG quality for screenshots (1-100)
    #[arg(long, env = "ILLUSTRATOR_MCP_JPEG_QUALITY", default_value_t = DEFAULT_JPEG_QUALITY)]
    pub jpeg_quality: u8,

    /// Directory for temporary script files [default: $TMP/illustrator-mcp]
    #[arg(long, env = "ILLUSTRATOR_MCP_SCRIPT_DIR")]
    pub script_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, env = "ILLUSTRATOR_MCP_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Tracing filter directive (overrides RUST_LOG)
    #[arg(long, env = "ILLUSTRATOR_MCP_LOG_FILTER")]
    pub log_filter: Option<String>,
}

impl ServerArgs {
    /// Converts parsed arguments into a validated configuration
    pub fn into_config(self) -> Result<BridgeConfig, ConfigError> {
        let config = BridgeConfig {
            backend:      self.backend,
            window_title: self.window_title,
            prog_id:      self.prog_id,
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            jpeg_quality: self.jpeg_quality,
            script_dir:   self.script_dir.unwrap_or_else(default_script_dir),
            log_format:   self.log_format,
            log_filter:   self.log_filter,
        };
        config.validate()?;
        Ok(config)
    }
}
