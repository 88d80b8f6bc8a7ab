// assembly.rs - FASTA input summaries

use bio::io::fasta;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Record count and total length of a FASTA file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastaSummary {
    pub records: usize,
    pub total_bases: usize,
    pub longest: usize,
}

impl FastaSummary {
    /// Read every record of `path`, failing on malformed or empty input
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open FASTA file '{}': {}", path.display(), e))?;
        let reader = fasta::Reader::new(BufReader::new(file));

        let mut summary = FastaSummary {
            records: 0,
            total_bases: 0,
            longest: 0,
        };
        for result in reader.records() {
            let record = result
                .map_err(|e| format!("Invalid FASTA record in '{}': {}", path.display(), e))?;
            let len = record.seq().len();
            summary.records += 1;
            summary.total_bases += len;
            summary.longest = summary.longest.max(len);
        }

        if summary.records == 0 {
            return Err(format!("No FASTA records found in '{}'", path.display()));
        }
        Ok(summary)
    }
}
