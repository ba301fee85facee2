// Utility modules

pub mod encode;

pub mod mcp_content;

pub mod temp_files;
