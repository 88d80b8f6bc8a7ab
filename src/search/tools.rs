// tools.rs - External BLAST+ tool invocation

use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// Locations of the BLAST+ executables and shared run options
#[derive(Debug, Clone, PartialEq)]
pub struct BlastTools {
    pub blastn: PathBuf,
    pub makeblastdb: PathBuf,
    /// Forwarded to blastn as `-num_threads`
    pub threads: Option<usize>,
}

impl Default for BlastTools {
    fn default() -> Self {
        Self {
            blastn: PathBuf::from("blastn"),
            makeblastdb: PathBuf::from("makeblastdb"),
            threads: None,
        }
    }
}

/// Run `program` with `args` to completion, failing on spawn errors or a non-zero exit
pub fn run_tool<I, S>(program: &OsStr, args: I, label: &str) -> Result<(), String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("{} running...", label));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let output = Command::new(program).args(args).output();
    spinner.finish_and_clear();

    let output = output.map_err(|e| {
        format!(
            "Failed to run {} ('{}'): {}",
            label,
            program.to_string_lossy(),
            e
        )
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "{} exited with {}: {}",
            label,
            output.status,
            stderr.trim()
        ));
    }
    Ok(())
}
