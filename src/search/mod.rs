// mod.rs - BLAST+ search stage

pub mod activators;
pub mod blastn;
pub mod database;
pub mod tools;

// Re-export main types for convenience
pub use activators::{classify, has_activator, Activation, ACTIVATOR_MARKERS};
pub use blastn::{raw_hits_path, run_blastn};
pub use database::{ensure_database, is_indexed, DatabaseStatus};
pub use tools::BlastTools;
