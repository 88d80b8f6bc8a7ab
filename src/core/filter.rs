// filter.rs - Coverage/identity filter over blastn hit files

use crate::core::hit::{header_line, BlastHit};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extension given to filtered hit files
pub const FILTERED_EXTENSION: &str = "VFDB_Active_Filtered";

pub const DEFAULT_MIN_COVERAGE: f64 = 0.7;
pub const DEFAULT_MIN_IDENTITY: f64 = 70.0;

/// Thresholds a hit must meet to be kept (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitFilter {
    /// Minimum aligned length over reference length (0.0-1.0)
    pub min_coverage: f64,
    /// Minimum percent identity (0.0-100.0)
    pub min_identity: f64,
}

impl Default for HitFilter {
    fn default() -> Self {
        Self {
            min_coverage: DEFAULT_MIN_COVERAGE,
            min_identity: DEFAULT_MIN_IDENTITY,
        }
    }
}

/// Counts reported after filtering a hit file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub total: usize,
    pub kept: usize,
}

impl HitFilter {
    pub fn new(min_coverage: f64, min_identity: f64) -> Self {
        Self {
            min_coverage,
            min_identity,
        }
    }

    pub fn passes(&self, hit: &BlastHit) -> bool {
        hit.coverage() >= self.min_coverage && hit.pident >= self.min_identity
    }

    /// Path of the filtered file derived from an active hit file
    pub fn filtered_path(active: &Path) -> PathBuf {
        active.with_extension(FILTERED_EXTENSION)
    }

    /// Copy passing lines of `input` to `output` verbatim, below a column header
    pub fn filter_file(&self, input: &Path, output: &Path) -> Result<FilterSummary, String> {
        let file = File::open(input)
            .map_err(|e| format!("Failed to open hit file '{}': {}", input.display(), e))?;
        let reader = BufReader::new(file);

        let out = File::create(output)
            .map_err(|e| format!("Failed to create filtered file '{}': {}", output.display(), e))?;
        let mut writer = BufWriter::new(out);
        writeln!(writer, "{}", header_line()).map_err(|e| format!("Write error: {}", e))?;

        let mut summary = FilterSummary { total: 0, kept: 0 };
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                format!("Failed to read line {} of '{}': {}", line_num + 1, input.display(), e)
            })?;
            if line.trim().is_empty() {
                continue;
            }

            summary.total += 1;
            let hit = BlastHit::parse_line(&line, line_num + 1)
                .map_err(|e| format!("{}: {}", input.display(), e))?;
            if self.passes(&hit) {
                writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
                summary.kept += 1;
            }
        }

        writer.flush().map_err(|e| format!("Flush error: {}", e))?;
        Ok(summary)
    }
}
