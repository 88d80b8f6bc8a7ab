// mod.rs - Input data module

pub mod assembly;

// Re-export main types for convenience
pub use assembly::FastaSummary;
