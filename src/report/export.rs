// export.rs - Tab-separated tally table

use crate::report::tally::TargetTally;
use std::fs::create_dir_all;
use std::path::Path;

/// Ensure parent directory exists before creating file
pub(crate) fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!("Failed to create parent directory '{}': {}", parent.display(), e)
            })?;
        }
    }
    Ok(())
}

/// Write one row per vocabulary entry under a `\tCount` header
pub fn write_tally_tsv(file_path: &Path, tally: &TargetTally) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;

    writer
        .write_record(["", "Count"])
        .map_err(|e| format!("Write error: {}", e))?;
    for (name, count) in tally.entries() {
        writer
            .write_record([*name, count.to_string().as_str()])
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}
