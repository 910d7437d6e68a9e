//! Shared fixture for the CLI integration tests.
//!
//! Each test binary compiles this module separately and uses only part of it.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "headline,url,publisher,date,stock";

/// The three-row sample used across the suite
pub const SAMPLE_ROWS: &str = "\
Stocks That Hit 52-Week Highs On Friday,https://example.com/1,Benzinga Insights,2020-06-05 10:30:54-04:00,A
Stocks That Hit 52-Week Highs On Wednesday,https://example.com/2,Benzinga Insights,2020-06-03 10:45:20-04:00,A
71 Biggest Movers From Friday,https://example.com/3,Lisa Levin,2020-05-26 04:30:07-04:00,A
";

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a CSV with the standard header followed by `rows`
    pub fn write_csv(&self, name: &str, rows: &str) -> PathBuf {
        self.write_file(name, &format!("{}\n{}", HEADER, rows))
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn sample_csv(&self) -> PathBuf {
        self.write_csv("news.csv", SAMPLE_ROWS)
    }

    /// Ten days of publishing where the last day is a burst of 20 articles
    pub fn spike_csv(&self) -> PathBuf {
        let mut rows = String::new();
        for day in 1..=9 {
            rows.push_str(&format!("h,u,p,2022-01-{:02} 09:00:00,A\n", day));
        }
        for _ in 0..20 {
            rows.push_str("h,u,p,2022-01-10 12:00:00,A\n");
        }
        self.write_csv("spiky.csv", &rows)
    }

    /// Binary isolated from the user's config and log settings
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("newslens");
        cmd.env("NEWSLENS_CONFIG", self.temp_dir.path().join("no-config.toml"))
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .arg("--no-color");
        cmd
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .arg("--format")
            .arg("json")
            .args(args)
            .output()
            .expect("Failed to run newslens");
        assert!(
            output.status.success(),
            "newslens {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
