//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of a CLI run: (stdout, stderr, exit code).
pub type CliOutput = (String, String, i32);

/// Temp directory holding an isolated config location.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("tfrag").join("config.toml")
    }

    /// Write `contents` to the sandbox config file.
    pub fn write_config(&self, contents: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().expect("config has a parent"))
            .expect("Failed to create config dir");
        std::fs::write(&path, contents).expect("Failed to write config");
    }

    /// Run tfrag with the sandbox config location and no ambient log filter.
    pub fn run(&self, args: &[&str]) -> CliOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_tfrag"))
            .args(args)
            .env("TFRAG_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute tfrag");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }

    /// Run and parse stdout as JSON, asserting success.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let (stdout, stderr, exit_code) = self.run(args);
        assert_eq!(exit_code, 0, "stderr: {}", stderr);
        serde_json::from_str(&stdout).expect("stdout is not valid JSON")
    }
}

/// Positions recorded in a `play --json` trace.
pub fn trace_positions(value: &serde_json::Value) -> Vec<f64> {
    value["trace"]
        .as_array()
        .expect("trace array")
        .iter()
        .map(|sample| sample["position"].as_f64().expect("position"))
        .collect()
}

/// Paused flags recorded in a `play --json` trace.
pub fn trace_paused(value: &serde_json::Value) -> Vec<bool> {
    value["trace"]
        .as_array()
        .expect("trace array")
        .iter()
        .map(|sample| sample["paused"].as_bool().expect("paused"))
        .collect()
}
