// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::HitFilter;
use crate::data::FastaSummary;
use crate::pipeline::QuerySettings;
use crate::search::BlastTools;
use std::path::{Path, PathBuf};

pub struct ValidationResult {
    pub settings: QuerySettings,
    pub assembly: FastaSummary,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let infile = args.infile.as_ref().ok_or("--infile is required")?;
    let database = args.database.as_ref().ok_or("--database is required")?;

    let infile = existing_file(infile, "Input FASTA")?;
    let database = existing_file(database, "VFDB database")?;

    // Validate thresholds
    if !(0.0..=1.0).contains(&args.min_coverage) {
        return Err("Minimum coverage must be between 0.0 and 1.0".to_string());
    }
    if !(0.0..=100.0).contains(&args.min_identity) {
        return Err("Minimum identity must be between 0.0 and 100.0".to_string());
    }
    if args.threads == Some(0) {
        return Err("Thread count must be at least 1".to_string());
    }
    if !(72..=1200).contains(&args.dpi) {
        return Err(format!("DPI must be between 72 and 1200, got {}", args.dpi));
    }

    if let Some(outdir) = &args.outdir {
        let outdir = Path::new(outdir);
        if outdir.exists() && !outdir.is_dir() {
            return Err(format!(
                "Output path '{}' exists and is not a directory",
                outdir.display()
            ));
        }
    }

    let assembly = FastaSummary::from_file(&infile)?;

    Ok(ValidationResult {
        settings: QuerySettings {
            infile,
            database,
            outdir: args.outdir.as_ref().map(PathBuf::from),
            tools: BlastTools {
                blastn: PathBuf::from(&args.blastn),
                makeblastdb: PathBuf::from(&args.makeblastdb),
                threads: args.threads,
            },
            filter: HitFilter::new(args.min_coverage, args.min_identity),
            dpi: args.dpi,
        },
        assembly,
    })
}

fn existing_file(path: &str, what: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(format!("{} '{}' does not exist", what, path.display()));
    }
    if !path.is_file() {
        return Err(format!("{} '{}' is not a file", what, path.display()));
    }
    Ok(path)
}
