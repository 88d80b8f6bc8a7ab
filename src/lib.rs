// lib.rs - vfdbquery library root

//! # vfdbquery - Virulence Factor Database query of bacterial assemblies
//!
//! Searches an assembly against the VFDB with `blastn`, keeps hits that cover
//! enough of the reference gene at high enough identity, and reports which of
//! a fixed panel of *Bacillus cereus* group virulence factors were detected.
//!
//! ## Pipeline
//!
//! 1. Build the BLAST nucleotide index of the database if it is missing
//! 2. Run `blastn` with tabular output
//! 3. Stop unless a plcR/papR activator marker was hit
//! 4. Filter hits by coverage (`length / slen`) and percent identity
//! 5. Tally hits per virulence factor and write a chart (PDF, PNG) and table (TSV)
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use vfdbquery::prelude::*;
//!
//! let settings = QuerySettings::new("assembly.fasta".into(), "VFDB_setB_nt.fas".into());
//! match VfdbQuery::new(settings).run()? {
//!     QueryOutcome::Complete(report) => println!("{}", report.outputs.pdf.display()),
//!     QueryOutcome::Inactive { hits } => println!("no activators, see {}", hits.display()),
//! }
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod search;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{BlastHit, FilterSummary, HitFilter};
    pub use crate::data::FastaSummary;
    pub use crate::pipeline::{QueryOutcome, QueryReport, QuerySettings, VfdbQuery};
    pub use crate::report::{ChartLayout, ReportPaths, TargetTally, TARGET_VOCABULARY};
    pub use crate::search::{Activation, BlastTools, DatabaseStatus, ACTIVATOR_MARKERS};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{BlastHit, HitFilter};
pub use pipeline::{QueryOutcome, QuerySettings, VfdbQuery};
pub use report::TargetTally;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "vfdbquery v{} - Virulence Factor Database query and report",
        VERSION
    )
}
