//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing timeago CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Reference instant used throughout the specs: 2013-08-30T12:00:00Z.
pub const BASE: &str = "2013-08-30T12:00:00Z";

/// Variables that would leak a developer's own settings into a run.
pub const ISOLATED_ENV: [&str; 5] = [
    "TIMEAGO_CONFIG",
    "TIMEAGO_LANG",
    "TIMEAGO_MAX",
    "TIMEAGO_LAYOUT",
    "TIMEAGO_LOG",
];

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to assert_cmd's lookup relative to the test binary itself when
/// CARGO_MANIFEST_DIR is stale (e.g. a shared target directory).
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    assert_cmd::cargo::cargo_bin(name)
}

/// Returns a Command configured to run the timeago binary
pub fn timeago_cmd() -> Command {
    Command::new(binary_path("timeago"))
}

/// Create a CLI builder for timeago commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    /// Keeps an isolated config directory alive for the run.
    config_dir: tempfile::TempDir,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            config_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Write a settings file and point TIMEAGO_CONFIG at it
    pub fn config_file(self, content: &str) -> Self {
        let path = self.config_dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        self.env("TIMEAGO_CONFIG", path)
    }

    /// Build the command without running it
    pub fn command(&self) -> Command {
        let mut cmd = timeago_cmd();
        cmd.args(&self.args);

        // Keep the developer's own settings and environment out of the specs.
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("XDG_CONFIG_HOME", self.config_dir.path());
        cmd.env("HOME", self.config_dir.path());
        cmd.env("NO_COLOR", "1");

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Exit code of the run
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}
