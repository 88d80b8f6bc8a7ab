// tally.rs - Fixed-vocabulary count of detected virulence factors

use std::path::Path;

/// Virulence factors reported on every chart, in display order
pub const TARGET_VOCABULARY: [&str; 16] = [
    "plcR Transcriptional activator",
    "papR Signal peptide",
    "HblL2 BC3104 Hemolysin BL lytic component L2",
    "HblL1 BC3103 Hemolysin BL lytic component L1",
    "HblB BC3102 Hemolysin BL binding component precursor",
    "NheA BC1809 Non-hemolytic enterotoxin lytic component L2",
    "NheB BC1810 Non-hemolytic enterotoxin lytic component L1",
    "NheC BC1811 Enterotoxin C",
    "CytK BC1110 Cytotoxin K",
    "HlyI BC5101 Perfringolysin O precursor",
    "HblB' BC3101 Hemolysin BL binding component precursor",
    "HlyII BC3523 Hemolysin II",
    "EntFM BC1953 Enterotoxin",
    "EntA BC5239 Enterotoxin - cell wall binding protein",
    "EntB BC2952 Enterotoxin - cell wall binding protein",
    "EntC BC0813 Enterotoxin - cell wall binding protein",
];

/// Hit counts per vocabulary entry, always holding all entries in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTally {
    counts: Vec<(&'static str, usize)>,
}

impl Default for TargetTally {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetTally {
    /// All vocabulary entries at zero
    pub fn new() -> Self {
        Self {
            counts: TARGET_VOCABULARY.iter().map(|&name| (name, 0)).collect(),
        }
    }

    /// Count one hit; titles outside the vocabulary are ignored.
    /// Returns whether the title was counted.
    pub fn record(&mut self, title: &str) -> bool {
        match self.counts.iter_mut().find(|(name, _)| *name == title) {
            Some((_, count)) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for title in titles {
            tally.record(title.as_ref());
        }
        tally
    }

    /// Tally the `stitle` column of a filtered hit file (header line required)
    pub fn from_filtered(path: &Path) -> Result<Self, String> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| format!("Failed to open filtered file '{}': {}", path.display(), e))?;

        let headers = reader
            .headers()
            .map_err(|e| format!("Failed to read header of '{}': {}", path.display(), e))?;
        let column = headers
            .iter()
            .position(|h| h == "stitle")
            .ok_or_else(|| format!("Column 'stitle' not found in '{}'", path.display()))?;

        let mut tally = Self::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                format!("Failed to read row {} of '{}': {}", row + 1, path.display(), e)
            })?;
            if let Some(title) = record.get(column) {
                tally.record(title);
            }
        }
        Ok(tally)
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }

    pub fn entries(&self) -> &[(&'static str, usize)] {
        &self.counts
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }

    /// Number of vocabulary entries with at least one hit
    pub fn detected(&self) -> usize {
        self.counts.iter().filter(|(_, c)| *c > 0).count()
    }
}

/// Sample name used to label outputs: the file name up to its first `.`
pub fn sample_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .and_then(|n| n.split('.').next().map(str::to_string))
        .unwrap_or_default()
}
