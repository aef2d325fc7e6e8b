// decompose.rs - Centroid edge search over leaf-count subtree weights

use thiserror::Error;

use crate::core::tree::{NodeId, Tree};

/// The edge to cut: `inner` is the centroid node, `outer` its parent.
///
/// Removing this edge splits the tree's leaves into two groups, each of size
/// at most half the total (rounded up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentroidEdge {
    pub inner: NodeId,
    pub outer: NodeId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecompositionError {
    /// Decomposition needs at least two leaves to have an edge worth cutting.
    #[error("tree has {leaves} leaves, decomposition requires at least 2")]
    TooFewLeaves { leaves: usize },

    /// The centroid search ended on the root, which has no parent edge to
    /// cut. Unreachable for trees with >= 2 leaves, kept as a typed guard.
    #[error("centroid search ended at the root, no edge to cut")]
    RootIsCentroid,
}

/// Leaf-count weight of each subtree, indexed by node id.
///
/// Iterative post-order over the child lists; a leaf weighs 1, an internal
/// node the sum of its children.
pub(crate) fn subtree_weights(tree: &Tree) -> Vec<usize> {
    let mut weights = vec![0usize; tree.len()];
    let mut order = Vec::with_capacity(tree.len());
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend_from_slice(tree.children(node));
    }
    // Reverse pre-order visits every node after all of its children.
    for &node in order.iter().rev() {
        weights[node] = if tree.is_leaf(node) {
            1
        } else {
            tree.children(node).iter().map(|&c| weights[c]).sum()
        };
    }
    weights
}

/// Find the centroid edge of `tree`.
///
/// Two passes, both O(nodes): compute subtree leaf counts, then walk down
/// from the root. A node is the centroid when its own subtree and every
/// child subtree weigh at most `total / 2` (integer division); the weight of
/// the rest of the tree is implicit in the own-subtree test, so the walk
/// only ever descends. When the test fails the walk moves to the heaviest
/// child, first one winning ties in child order, which keeps the result
/// deterministic for a given parse.
pub fn centroid_edge(tree: &Tree) -> Result<CentroidEdge, DecompositionError> {
    let weights = subtree_weights(tree);
    let total = weights[tree.root()];
    if total < 2 {
        return Err(DecompositionError::TooFewLeaves { leaves: total });
    }
    let half = total / 2;

    let mut node = tree.root();
    loop {
        let mut balanced = weights[node] <= half;
        let mut heaviest: Option<NodeId> = None;
        for &child in tree.children(node) {
            if weights[child] > half {
                balanced = false;
            }
            if heaviest.map_or(true, |h| weights[child] > weights[h]) {
                heaviest = Some(child);
            }
        }
        if balanced {
            break;
        }
        // An unbalanced node always has children: a leaf weighs 1 <= half.
        let Some(next) = heaviest else { break };
        node = next;
    }

    match tree.parent(node) {
        Some(outer) => Ok(CentroidEdge { inner: node, outer }),
        None => Err(DecompositionError::RootIsCentroid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::newick::parse_newick;

    fn side_sizes(tree: &Tree, edge: CentroidEdge) -> (usize, usize) {
        let weights = subtree_weights(tree);
        let inner = weights[edge.inner];
        (inner, weights[tree.root()] - inner)
    }

    #[test]
    fn test_subtree_weights() {
        let tree = parse_newick("(A,B,(C,D));").unwrap();
        let weights = subtree_weights(&tree);
        assert_eq!(weights[tree.root()], 4);
        // Leaves weigh 1, the (C,D) clade weighs 2.
        assert_eq!(weights[1], 1);
        assert_eq!(weights[2], 1);
        assert_eq!(weights[3], 2);
    }

    #[test]
    fn test_fixed_point_quartet() {
        // (A,B,(C,D)): the centroid edge must cut the (C,D) clade from the
        // root, splitting the leaves {C,D} | {A,B}.
        let tree = parse_newick("(A,B,(C,D));").unwrap();
        let edge = centroid_edge(&tree).unwrap();
        assert_eq!(edge.outer, tree.root());
        assert_eq!(tree.parent(edge.inner), Some(edge.outer));
        let inner_leaves: Vec<&str> = tree
            .children(edge.inner)
            .iter()
            .map(|&n| tree.name(n))
            .collect();
        assert_eq!(inner_leaves, vec!["C", "D"]);
        assert_eq!(side_sizes(&tree, edge), (2, 2));
    }

    #[test]
    fn test_balance_property() {
        // Both sides of the returned edge stay within ceil(total / 2). This
        // holds for binary topologies (what FastTree emits); a star tree has
        // no balanced edge to begin with.
        for input in [
            "(A,B);",
            "(A,B,C);",
            "(A,B,(C,D));",
            "((A,B),(C,D));",
            "(A,(B,(C,(D,E))));",
            "(A,(B,(C,(D,(E,(F,G))))));",
            "((A,B),(C,(D,E)));",
        ] {
            let tree = parse_newick(input).unwrap();
            let edge = centroid_edge(&tree).unwrap();
            let total = tree.leaf_count();
            let (a, b) = side_sizes(&tree, edge);
            let limit = total.div_ceil(2);
            assert!(a <= limit && b <= limit, "unbalanced split {a}/{b} for {input}");
            assert_eq!(a + b, total);
        }
    }

    #[test]
    fn test_two_leaf_tree_cuts_first_leaf() {
        let tree = parse_newick("(A,B);").unwrap();
        let edge = centroid_edge(&tree).unwrap();
        // Equal weights: the first child in parse order wins the descent.
        assert_eq!(tree.name(edge.inner), "A");
        assert_eq!(edge.outer, tree.root());
    }

    #[test]
    fn test_too_few_leaves() {
        let tree = parse_newick("(A);").unwrap();
        assert_eq!(
            centroid_edge(&tree).unwrap_err(),
            DecompositionError::TooFewLeaves { leaves: 1 }
        );
        let lone = parse_newick("A;").unwrap();
        assert_eq!(
            centroid_edge(&lone).unwrap_err(),
            DecompositionError::TooFewLeaves { leaves: 0 }
        );
    }

    #[test]
    fn test_deterministic_tie_break() {
        let tree = parse_newick("((A,B),(C,D));").unwrap();
        let first = centroid_edge(&tree).unwrap();
        let second = centroid_edge(&tree).unwrap();
        assert_eq!(first, second);
        // Both clades weigh 2; the first child of the root is chosen.
        assert_eq!(first.inner, tree.children(tree.root())[0]);
    }
}
