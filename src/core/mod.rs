// mod.rs - Core decomposition pipeline: parse -> decompose -> partition -> score

pub mod decompose;
pub mod newick;
pub mod partition;
pub mod selection;
pub mod tree;

// Re-export main types for convenience
pub use decompose::{centroid_edge, CentroidEdge, DecompositionError};
pub use newick::{parse_newick, parse_newick_with_capacity, ParseError};
pub use partition::{partition_msa, PartitionError};
pub use selection::{free_param_delta, select_model, ModelChoice, Selection, SelectionError};
pub use tree::{NodeId, Tree, DEFAULT_NODE_CAPACITY};
