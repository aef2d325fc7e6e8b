// newick.rs - Single-pass FSM parser for Newick tree descriptions

use thiserror::Error;

use crate::core::tree::{NodeId, Tree, DEFAULT_NODE_CAPACITY};

/// Errors from Newick parsing. All are terminal for the input; the caller
/// aborts the run rather than retrying.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// More closing than opening parentheses: the parser would ascend past
    /// the root.
    #[error("unbalanced parentheses: unexpected ')' at byte {position}")]
    UnbalancedParens { position: usize },

    /// The tree description needs more nodes than the configured arena
    /// capacity allows.
    #[error("tree exceeds the node capacity of {capacity}")]
    CapacityExceeded { capacity: usize },

    /// The input stream contained no tree description at all.
    #[error("empty tree description")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReadingName,
    ReadingOther,
}

/// Parse a Newick string into a [`Tree`] with the default node capacity.
pub fn parse_newick(input: &str) -> Result<Tree, ParseError> {
    parse_newick_with_capacity(input, DEFAULT_NODE_CAPACITY)
}

/// Parse a Newick string into a [`Tree`], refusing to allocate more than
/// `capacity` nodes.
///
/// The machine has two states: `ReadingName` accumulates label characters
/// into a local buffer, `ReadingOther` (entered on `:`) discards branch
/// lengths. Structural characters drive node allocation:
///
/// - `(` descends one level and allocates the first child of the new level,
/// - `,` finishes the current node and allocates a sibling,
/// - `)` finishes the current node and ascends without touching the state,
///   so an enclosing label is only picked up when no branch length put the
///   machine into `ReadingOther`,
/// - end of input finishes whatever node is current.
///
/// A node finished with an empty buffer is named after its own numeric id,
/// so anonymous internal nodes always end up with a unique label.
/// Semicolons and ASCII whitespace are tolerated and skipped in every
/// state; branch lengths are consumed and discarded.
pub fn parse_newick_with_capacity(input: &str, capacity: usize) -> Result<Tree, ParseError> {
    let mut tree = Tree::with_root();
    let mut state = State::ReadingName;
    let mut current: NodeId = tree.root();
    let mut parent: Option<NodeId> = None;
    let mut name_buf = String::new();
    let mut seen_any = false;

    for (position, ch) in input.char_indices() {
        if ch == ';' || ch.is_ascii_whitespace() {
            continue;
        }
        seen_any = true;
        match ch {
            '(' => {
                parent = Some(current);
                current = allocate_child(&mut tree, current, capacity)?;
                name_buf.clear();
                state = State::ReadingName;
            }
            ',' => {
                finish_node(&mut tree, current, &mut name_buf);
                let Some(p) = parent else {
                    // A sibling separator outside any open clade is the same
                    // nesting violation as a stray ')'.
                    return Err(ParseError::UnbalancedParens { position });
                };
                current = allocate_child(&mut tree, p, capacity)?;
                state = State::ReadingName;
            }
            ')' => {
                finish_node(&mut tree, current, &mut name_buf);
                let Some(p) = parent else {
                    return Err(ParseError::UnbalancedParens { position });
                };
                current = p;
                parent = tree.parent(current);
            }
            ':' => {
                state = State::ReadingOther;
            }
            _ => {
                if state == State::ReadingName {
                    name_buf.push(ch);
                }
            }
        }
    }

    if !seen_any {
        return Err(ParseError::EmptyInput);
    }

    // End of stream finishes the final current node like ',' or ')' would.
    finish_node(&mut tree, current, &mut name_buf);
    Ok(tree)
}

fn allocate_child(tree: &mut Tree, parent: NodeId, capacity: usize) -> Result<NodeId, ParseError> {
    if tree.len() >= capacity {
        return Err(ParseError::CapacityExceeded { capacity });
    }
    Ok(tree.add_child(parent))
}

/// Assign the accumulated label to `node`, falling back to the node's numeric
/// id when no label was read, and reset the buffer for the next node.
fn finish_node(tree: &mut Tree, node: NodeId, name_buf: &mut String) {
    if name_buf.is_empty() {
        tree.set_name(node, node.to_string());
    } else {
        tree.set_name(node, std::mem::take(name_buf));
    }
}
