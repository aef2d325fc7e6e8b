// mod.rs - File format loaders

pub mod fasta;
pub mod hmmer;

pub use fasta::{read_msa, write_msa};
pub use hmmer::{read_model_length, read_tblout_scores};
