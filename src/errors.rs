use thiserror::Error;

/// Errors that can occur while configuring or serving mma-doc.
#[derive(Error, Debug)]
pub enum MmaDocError {
    #[error("config error: {message} (path: {path})")]
    Config { message: String, path: String },

    #[error("invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience alias for results using `MmaDocError`.
pub type Result<T> = std::result::Result<T, MmaDocError>;

/// Failure of a single engine invocation.
///
/// The `Display` output is the exact text returned to callers, so the
/// messages must not change shape.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine ran but exited with a non-zero status.
    #[error("Error executing Mathematica command: {stderr}")]
    Exited {
        status: Option<i32>,
        stderr: String,
    },

    /// The engine could not be started or its output could not be read.
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}
