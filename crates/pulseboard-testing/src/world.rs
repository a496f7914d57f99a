//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Writing backend configuration and a stored session
//! - Executing the `pulseboard` binary against it

use anyhow::Result;
use assert_cmd::Command;
use pulseboard_types::Session;
use std::collections::HashMap;
use std::path::Path;
use std::process::ExitStatus;
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared so the host setup never leaks in
const HOST_ENV: [&str; 5] = [
    "PULSEBOARD_PATH",
    "PULSEBOARD_URL",
    "PULSEBOARD_ANON_KEY",
    "PULSEBOARD_PASSWORD",
    "RUST_LOG",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use pulseboard_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new()
///     .with_backend("http://127.0.0.1:9999")
///     .with_session(&fixtures::session_for(1));
///
/// let result = world.run(&["whoami"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `config.toml` pointing at `url` with a fixed test key.
    pub fn with_backend(self, url: &str) -> Self {
        let content = format!(
            "[backend]\nurl = \"{}\"\nanon_key = \"test-anon-key\"\nposts_table = \"posts\"\n",
            url
        );
        std::fs::write(self.data_dir().join("config.toml"), content)
            .expect("Failed to write config");
        self
    }

    /// Write `session.json` as if `login` had succeeded.
    pub fn with_session(self, session: &Session) -> Self {
        let content = serde_json::to_string_pretty(session).expect("Failed to serialize session");
        std::fs::write(self.data_dir().join("session.json"), content)
            .expect("Failed to write session");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn has_session_file(&self) -> bool {
        self.data_dir().join("session.json").exists()
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        for key in HOST_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a CLI command in this test environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("pulseboard")
            .map_err(|e| anyhow::anyhow!("Failed to find pulseboard binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of CLI command execution.
pub struct CliResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
