pub mod config;
pub mod engine;
pub mod errors;
pub mod format;
pub mod mcp;
pub mod mmadoc;
pub mod script;
pub mod types;
