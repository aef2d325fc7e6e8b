// tree.rs - Owned tree arena with parent pointers and ordered child lists

pub type NodeId = usize;

/// Default capacity of the node arena. Guide trees for realistic inputs
/// stay far below this.
pub const DEFAULT_NODE_CAPACITY: usize = 10_000;

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    name: String,
    children: Vec<NodeId>,
}

/// A rooted, unweighted phylogenetic tree.
///
/// Nodes are identified by dense indices `0..len()`, with node 0 always the
/// root. Topology is stored twice for O(1) navigation in both directions:
/// a parent pointer per node and an ordered child list per node (insertion
/// order equals parse order). The tree is built incrementally by the Newick
/// parser and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree containing only the root node (id 0, unnamed).
    pub(crate) fn with_root() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                name: String::new(),
                children: Vec::new(),
            }],
        }
    }

    /// Allocate a fresh node as the last child of `parent` and return its id.
    pub(crate) fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(parent),
            name: String::new(),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub(crate) fn set_name(&mut self, node: NodeId, name: String) {
        self.nodes[node].name = name;
    }

    /// Number of nodes in the tree (root included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node id (always 0).
    pub fn root(&self) -> NodeId {
        0
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.nodes[node].name
    }

    /// Total adjacency degree: the parent edge plus all child edges.
    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node].children.len() + usize::from(self.nodes[node].parent.is_some())
    }

    /// True iff `node` is a leaf: degree exactly 1 and not the root.
    ///
    /// The root is never a leaf, whatever its degree. A root with a single
    /// child is degree 1 but still an internal node, and a single-node tree
    /// has no leaves at all.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.degree(node) == 1 && self.nodes[node].parent.is_some()
    }

    /// Iterate over all leaf ids in id order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).filter(move |&n| self.is_leaf(n))
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Neighbors of `node` in the undirected view: the parent (if any)
    /// followed by the children in insertion order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[node]
            .parent
            .into_iter()
            .chain(self.nodes[node].children.iter().copied())
    }

    /// Serialize the topology back to canonical Newick: nested parentheses,
    /// node names, no branch lengths, trailing semicolon.
    pub fn to_newick(&self) -> String {
        let mut out = String::new();
        // Explicit stack instead of recursion; tree depth is unbounded.
        enum Step {
            Enter(NodeId),
            Exit(NodeId),
            Comma,
        }
        let mut stack = vec![Step::Enter(self.root())];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node) => {
                    if self.children(node).is_empty() {
                        out.push_str(self.name(node));
                    } else {
                        out.push('(');
                        stack.push(Step::Exit(node));
                        for (i, &child) in self.children(node).iter().enumerate().rev() {
                            stack.push(Step::Enter(child));
                            if i > 0 {
                                stack.push(Step::Comma);
                            }
                        }
                    }
                }
                Step::Exit(node) => {
                    out.push(')');
                    out.push_str(self.name(node));
                }
                Step::Comma => out.push(','),
            }
        }
        out.push(';');
        out
    }
}
