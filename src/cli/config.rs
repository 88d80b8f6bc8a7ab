// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub infile: Option<String>,
    pub database: Option<String>,
    pub outdir: Option<String>,

    // External tools
    pub blastn: Option<String>,
    pub makeblastdb: Option<String>,
    pub threads: Option<usize>,

    // Hit filter
    pub min_coverage: Option<f64>,
    pub min_identity: Option<f64>,

    // Chart
    pub dpi: Option<u32>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# vfdbquery.toml - Configuration file for vfdbquery
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# FASTA assembly to search
infile = "/path/to/assembly.fasta"

# Virulence Factor Database FASTA (indexed with makeblastdb on first use)
database = "/path/to/VFDB_setB_nt.fas"

# Output directory (omit to write next to the assembly)
# outdir = "results"

# =============================================================================
# EXTERNAL TOOLS
# =============================================================================

# BLAST+ executables (names are looked up on PATH)
blastn = "blastn"
makeblastdb = "makeblastdb"

# Number of blastn threads (omit for blastn's default)
# threads = 8

# =============================================================================
# HIT FILTER
# =============================================================================

# Minimum alignment length over reference gene length (0.0-1.0)
min_coverage = 0.7

# Minimum percent identity (0.0-100.0)
min_identity = 70.0

# =============================================================================
# CHART
# =============================================================================

# PNG resolution in dots per inch
dpi = 300
"#
        .to_string()
    }
}
