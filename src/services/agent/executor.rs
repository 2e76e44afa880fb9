//! Agent CLI Executor
//!
//! Spawns and manages the investigation agent (the Claude Code CLI) as a
//! child process. Provides async lifecycle management; the process is
//! killed on drop so an abandoned investigation never leaks a child.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::debug;

use crate::utils::error::{AppError, AppResult};

use super::message::EXECUTION_TOOL;

/// Capacity of the stdout line channel
const LINE_CHANNEL_CAPACITY: usize = 100;

/// Configuration for spawning the investigation agent
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Agent binary name or path
    pub binary: String,
    /// API key for the agent; spawning without one is refused upstream
    pub api_key: Option<String>,
    /// Model override (agent default when unset)
    pub model: Option<String>,
    /// Turn cap for one investigation
    pub max_turns: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            binary: "claude".to_string(),
            api_key: None,
            model: None,
            max_turns: 20,
        }
    }
}

impl AgentConfig {
    /// Build a configuration from the environment.
    ///
    /// Reads `ANTHROPIC_API_KEY`, `SCOLO_AGENT_BIN`, `SCOLO_AGENT_MODEL`,
    /// and `SCOLO_MAX_TURNS`; anything unset keeps the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            binary: std::env::var("SCOLO_AGENT_BIN").unwrap_or(defaults.binary),
            api_key: std::env::var("ANTHROPIC_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("SCOLO_AGENT_MODEL").ok().filter(|m| !m.is_empty()),
            max_turns: std::env::var("SCOLO_MAX_TURNS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_turns),
        }
    }

    /// Set the model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the turn cap
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Handle to a running agent process
pub struct AgentProcess {
    child: Child,
    pid: u32,
}

impl AgentProcess {
    /// Get the process ID
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Kill the process
    pub async fn kill(&mut self) -> AppResult<()> {
        self.child
            .kill()
            .await
            .map_err(|e| AppError::agent(format!("Failed to kill agent process: {}", e)))
    }

    /// Wait for the process to exit and return its exit code
    pub async fn wait(&mut self) -> AppResult<Option<i32>> {
        let status = self
            .child
            .wait()
            .await
            .map_err(|e| AppError::agent(format!("Failed to wait for agent process: {}", e)))?;
        Ok(status.code())
    }

    /// Take the stdout handle (can only be called once)
    pub fn take_stdout(&mut self) -> Option<tokio::process::ChildStdout> {
        self.child.stdout.take()
    }

    /// Take the stderr handle (can only be called once)
    pub fn take_stderr(&mut self) -> Option<tokio::process::ChildStderr> {
        self.child.stderr.take()
    }
}

impl Drop for AgentProcess {
    fn drop(&mut self) {
        // Non-async kill attempt to prevent zombies
        let _ = self.child.start_kill();
    }
}

/// Agent CLI executor service
#[derive(Debug, Default)]
pub struct AgentExecutor {
    config: AgentConfig,
}

impl AgentExecutor {
    /// Create an executor with the given configuration
    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }

    /// The executor's configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Spawn the agent on one investigation prompt.
    ///
    /// The process runs non-interactively with `--output-format
    /// stream-json` and only the execution tool enabled.
    pub async fn spawn(&self, prompt: &str) -> AppResult<AgentProcess> {
        let mut cmd = Command::new(&self.config.binary);

        cmd.arg("-p")
            .arg(prompt)
            .arg("--output-format")
            .arg("stream-json")
            .arg("--verbose")
            .arg("--max-turns")
            .arg(self.config.max_turns.to_string())
            .arg("--allowedTools")
            .arg(EXECUTION_TOOL);

        if let Some(ref model) = self.config.model {
            cmd.arg("--model").arg(model);
        }

        if let Some(ref key) = self.config.api_key {
            cmd.env("ANTHROPIC_API_KEY", key);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::agent(format!(
                    "Agent CLI '{}' not found. Install it with: npm install -g @anthropic-ai/claude-code",
                    self.config.binary
                ))
            } else {
                AppError::agent(format!("Failed to spawn agent CLI: {}", e))
            }
        })?;

        let pid = child.id().unwrap_or(0);

        Ok(AgentProcess { child, pid })
    }

    /// Spawn the agent and set up a line reader for stdout.
    ///
    /// Returns the process handle and a channel receiver yielding stdout
    /// lines. Stderr is drained to the debug log so the child never
    /// blocks on a full pipe.
    pub async fn spawn_with_reader(
        &self,
        prompt: &str,
    ) -> AppResult<(AgentProcess, mpsc::Receiver<String>)> {
        let mut process = self.spawn(prompt).await?;

        let stdout = process
            .take_stdout()
            .ok_or_else(|| AppError::agent("Failed to capture stdout from agent process"))?;

        if let Some(stderr) = process.take_stderr() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!(target: "agent_stderr", "{}", line);
                }
            });
        }

        let (tx, rx) = mpsc::channel(LINE_CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if tx.send(line).await.is_err() {
                    // Receiver dropped, stop reading
                    break;
                }
            }
        });

        Ok((process, rx))
    }
}
