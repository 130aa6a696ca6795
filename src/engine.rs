//! Runs the external engine as a subprocess.
//!
//! The engine is invoked as `<executable> [extra_args...] -code <script>`,
//! awaited to completion, and its stdout returned trimmed. There is no retry,
//! timeout, or output cap: a hung engine hangs the call.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::MmaDocConfig;
use crate::errors::EngineError;

/// Flag introducing the inline script on the engine command line.
pub const CODE_FLAG: &str = "-code";

/// Handle on the engine executable. Cheap to clone; holds no session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    executable: String,
    extra_args: Vec<String>,
}

impl Engine {
    /// Creates an engine invoking `executable` with no extra arguments.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            extra_args: Vec::new(),
        }
    }

    /// Creates an engine from the loaded configuration.
    pub fn from_config(config: &MmaDocConfig) -> Self {
        Self {
            executable: config.executable.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    /// Adds arguments placed before `-code`.
    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The executable name or path.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Runs `script` and returns its trimmed stdout.
    pub async fn run(&self, script: &str) -> Result<String, EngineError> {
        debug!(executable = %self.executable, script, "running engine");

        let output = Command::new(&self.executable)
            .args(&self.extra_args)
            .arg(CODE_FLAG)
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            return Err(EngineError::Exited {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Runs `script` and flattens any failure into its error text.
    ///
    /// Callers distinguish success from failure by inspecting the content.
    pub async fn run_text(&self, script: &str) -> String {
        match self.run(script).await {
            Ok(stdout) => stdout,
            Err(e) => {
                warn!(executable = %self.executable, error = %e, "engine call failed");
                e.to_string()
            }
        }
    }
}
