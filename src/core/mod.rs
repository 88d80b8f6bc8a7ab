// mod.rs - Hit records and filtering

pub mod filter;
pub mod hit;

// Re-export main types for convenience
pub use filter::{FilterSummary, HitFilter};
pub use hit::BlastHit;
