// lib.rs - hmmdecomp library root

//! # hmmdecomp - profile-HMM decomposition decision
//!
//! Given an aligned set of biological sequences, this library decides whether
//! a single profile HMM or a pair of HMMs built from a phylogenetically
//! informed split of the data better explains the sequences, using a BIC
//! criterion.
//!
//! The core pipeline is purely in-process: parse a Newick tree, find its
//! centroid edge, partition the alignment along that edge, and compare the
//! models' summed bitscores. Model building and scoring themselves are
//! delegated to external tools (hmmbuild/hmmsearch from HMMER, FastTree for
//! the guide tree) driven by the [`tools`] module.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hmmdecomp::prelude::*;
//!
//! // Parse the guide tree and cut it at the centroid edge
//! let tree = parse_newick("(A,B,(C,D));")?;
//! let edge = centroid_edge(&tree)?;
//!
//! // Split the alignment along the cut
//! let msa = Msa::from_records(vec![
//!     ("A".to_string(), "ACGTACGTAC".to_string()),
//!     ("B".to_string(), "ACGTACGTAA".to_string()),
//!     ("C".to_string(), "TTGTACGTAC".to_string()),
//!     ("D".to_string(), "TTGTACGTAA".to_string()),
//! ])?;
//! let (first, second) = partition_msa(&tree, edge, &msa)?;
//! assert_eq!(first.num_seqs() + second.num_seqs(), msa.num_seqs());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod tools;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{
        centroid_edge, free_param_delta, parse_newick, parse_newick_with_capacity, partition_msa,
        select_model, CentroidEdge, DecompositionError, ModelChoice, ParseError, PartitionError,
        Selection, SelectionError, Tree,
    };
    pub use crate::data::loaders::{read_model_length, read_msa, read_tblout_scores, write_msa};
    pub use crate::data::{Msa, MsaError};
    pub use crate::output::{write_json, write_text, DecisionReport};
    pub use crate::tools::{fasttree_job, hmmbuild_job, hmmsearch_job, JobPaths};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{CentroidEdge, ModelChoice, Selection, Tree};
pub use crate::data::Msa;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "hmmdecomp v{} - profile-HMM decomposition decision by BIC",
        VERSION
    )
}
