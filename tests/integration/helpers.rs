//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use folio::console::HISTORY_KEY;

/// Isolated `FOLIO_HOME` with its config and data directories.
pub struct FolioHome {
    dir: TempDir,
}

impl FolioHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path().join("data")
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", HISTORY_KEY))
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.path().join("config.toml"), content).expect("Failed to write config");
    }

    pub fn write_history(&self, lines: &[&str]) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data dir");
        let json = serde_json::to_string(lines).expect("Failed to encode history");
        fs::write(self.history_file(), json).expect("Failed to write history");
    }

    /// `folio` binary pointed at this home, with locale and logging
    /// variables scrubbed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        cmd.env("FOLIO_HOME", self.path())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_MESSAGES")
            .env_remove("FOLIO_LOG");
        cmd
    }

    /// Run folio and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to execute folio");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}
