// mod.rs - Data structures module

pub mod loaders;
pub mod msa;

// Re-export main types for convenience
pub use msa::{Msa, MsaError};
