//! illustrator-mcp: MCP server for Adobe Illustrator
//!
//! This library exposes two Model Context Protocol tools to coding agents:
//! `view`, which screenshots the Illustrator window, and `run`, which
//! executes ExtendScript source inside Illustrator. Automation goes through
//! a narrow [`automation::AutomationChannel`] so the dispatch logic can run
//! against a mock on any platform.

pub mod automation;
pub mod config;
pub mod error;
pub mod handlers;
pub mod mcp;
pub mod model;
pub mod prompt;
pub mod registry;
pub mod telemetry;
pub mod util;
