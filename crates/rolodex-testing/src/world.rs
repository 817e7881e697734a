//! TestWorld pattern for declarative end-to-end test setup.
//!
//! Provides an isolated data directory wired to the `rolodex` binary
//! through the `ROLODEX_PATH` environment variable, plus helpers to seed
//! the store file and read it back after a scripted run.

use anyhow::Result;
use assert_cmd::Command;
use rolodex_store::{ContactBook, STORE_FILE_NAME};
use rolodex_types::Contact;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment for driving the binary with scripted stdin.
///
/// # Example
/// ```no_run
/// use rolodex_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.run_script("q\n").success();
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".rolodex");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// The data directory the binary is pointed at
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the phone book file inside the data directory
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// Path of the config file inside the data directory
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Command for the rolodex binary scoped to this world's data dir
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rolodex").expect("Failed to find rolodex binary");
        cmd.env("ROLODEX_PATH", &self.data_dir);
        cmd
    }

    /// Run the binary against a scripted stdin and return the assertion
    /// handle. Scripts should normally end with `q` to quit the loop.
    pub fn run_script(&self, script: &str) -> assert_cmd::assert::Assert {
        self.command().write_stdin(script.to_string()).assert()
    }

    /// Write a config file for the next run
    pub fn write_config(&self, content: &str) -> Result<()> {
        fs::write(self.config_path(), content)?;
        Ok(())
    }

    /// Seed the store with contacts directly, bypassing the binary
    pub fn seed_contacts(&self, contacts: Vec<Contact>) -> Result<()> {
        let mut book = ContactBook::open(self.store_path())?;
        for contact in contacts {
            book.add_contact(contact);
        }
        book.save()?;
        Ok(())
    }

    /// Write raw bytes into the store file (for corruption tests)
    pub fn write_raw_store(&self, content: &str) -> Result<()> {
        fs::write(self.store_path(), content)?;
        Ok(())
    }

    /// Parse the store file back as JSON
    pub fn read_store(&self) -> Result<serde_json::Value> {
        let raw = fs::read_to_string(self.store_path())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Number of contacts currently persisted
    pub fn stored_contact_count(&self) -> Result<usize> {
        let doc = self.read_store()?;
        Ok(doc["contacts"]
            .as_object()
            .map(|contacts| contacts.len())
            .unwrap_or(0))
    }
}
