// database.rs - BLAST nucleotide index detection and creation

use crate::logging;
use crate::search::tools::{run_tool, BlastTools};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Extensions makeblastdb produces for a nucleotide database
pub const INDEX_EXTENSIONS: [&str; 3] = ["nhr", "nin", "nsq"];

/// Whether the index was already present or had to be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Existing,
    Created,
}

/// True if the database's directory holds `.nhr`, `.nin` and `.nsq` files
pub fn is_indexed(database: &Path) -> bool {
    let dir = match database.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };

    let mut found = [false; INDEX_EXTENSIONS.len()];
    for entry in entries.flatten() {
        let path = entry.path();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if let Some(i) = INDEX_EXTENSIONS.iter().position(|x| *x == ext) {
                found[i] = true;
            }
        }
    }
    found.iter().all(|&f| f)
}

/// Build the nucleotide index with makeblastdb unless one is already present
pub fn ensure_database(database: &Path, tools: &BlastTools) -> Result<DatabaseStatus, String> {
    if is_indexed(database) {
        logging::info("BLAST database detected");
        return Ok(DatabaseStatus::Existing);
    }

    let name = database
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| database.display().to_string());
    logging::info(format!("Creating BLAST database with {}", name));

    run_tool(
        tools.makeblastdb.as_os_str(),
        [
            OsStr::new("-in"),
            database.as_os_str(),
            OsStr::new("-dbtype"),
            OsStr::new("nucl"),
        ],
        "makeblastdb",
    )?;
    Ok(DatabaseStatus::Created)
}
