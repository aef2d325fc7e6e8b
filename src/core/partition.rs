// partition.rs - Split an alignment along a centroid edge of its tree

use thiserror::Error;

use crate::core::decompose::CentroidEdge;
use crate::core::tree::{NodeId, Tree};
use crate::data::msa::{Msa, MsaError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    /// A tree leaf has no matching sequence in the source alignment; the
    /// tree and the alignment were not built from the same data.
    #[error("tree leaf '{name}' has no sequence in the source alignment")]
    NameNotFound { name: String },

    /// A collected side violated the alignment invariants. Cannot happen for
    /// sides drawn from a valid source alignment.
    #[error(transparent)]
    InvalidSide(#[from] MsaError),
}

/// Cut `tree` at `edge` and split `source` into the two leaf-induced
/// sub-alignments.
///
/// Each side is the set of leaves reachable from one edge endpoint without
/// crossing to the other; sequences are copied from `source` by leaf name.
/// The sides are disjoint and together cover every leaf of the tree. Returns
/// the inner-endpoint side first.
pub fn partition_msa(
    tree: &Tree,
    edge: CentroidEdge,
    source: &Msa,
) -> Result<(Msa, Msa), PartitionError> {
    let first = extract_side(tree, edge.inner, edge.outer, source)?;
    let second = extract_side(tree, edge.outer, edge.inner, source)?;
    Ok((first, second))
}

fn extract_side(
    tree: &Tree,
    start: NodeId,
    blocked: NodeId,
    source: &Msa,
) -> Result<Msa, PartitionError> {
    let mut records = Vec::new();
    for leaf in side_leaves(tree, start, blocked) {
        let name = tree.name(leaf);
        let Some(sequence) = source.sequence(name) else {
            return Err(PartitionError::NameNotFound {
                name: name.to_string(),
            });
        };
        records.push((name.to_string(), sequence.to_string()));
    }
    Ok(Msa::from_records(records)?)
}

/// Leaves reachable from `start` in the undirected tree without visiting
/// `blocked`, in depth-first visit order. Explicit stack; tree depth is
/// unbounded.
fn side_leaves(tree: &Tree, start: NodeId, blocked: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; tree.len()];
    visited[blocked] = true;
    visited[start] = true;
    let mut leaves = Vec::new();
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if tree.is_leaf(node) {
            leaves.push(node);
        }
        for neighbor in tree.neighbors(node) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                stack.push(neighbor);
            }
        }
    }
    leaves
}
