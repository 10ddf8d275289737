//! Minimax with alpha-beta pruning and visited-leaf accounting.

use tracing::trace;

use crate::minimax::tree::{GameNode, NodeKind};

/// The result of solving a game tree: the value backed up to the root, and
/// how many leaves the pruning evaluation actually visited.
///
/// The leaf count is itself a graded quantity, so child evaluation order is
/// preserved exactly as given; this solver never applies move ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxOutcome {
    pub root_value: i64,
    pub visited_leaves: u64,
}

/// Evaluates `root` with alpha-beta pruning.
///
/// The root's own tag decides whether the top level maximizes or minimizes;
/// levels below alternate. Bounds start fully open.
pub fn solve(root: &GameNode) -> MinimaxOutcome {
    let mut visited = 0;
    let root_value = alphabeta(root, i64::MIN, i64::MAX, is_maximizing(root), &mut visited);
    MinimaxOutcome {
        root_value,
        visited_leaves: visited,
    }
}

/// Exhaustive minimax without pruning; visits every leaf. Used to cross-check
/// the pruning solver and to build "no pruning" comparison answers.
pub fn evaluate(root: &GameNode) -> i64 {
    minimax(root, is_maximizing(root))
}

fn is_maximizing(root: &GameNode) -> bool {
    // A bare-leaf root never consults the flag.
    !matches!(
        root,
        GameNode::Internal {
            kind: NodeKind::Min,
            ..
        }
    )
}

fn alphabeta(
    node: &GameNode,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    visited: &mut u64,
) -> i64 {
    let children = match node {
        GameNode::Leaf { value } => {
            *visited += 1;
            return *value;
        }
        GameNode::Internal { children, .. } => children,
    };

    if maximizing {
        let mut value = i64::MIN;
        for (i, child) in children.iter().enumerate() {
            value = value.max(alphabeta(child, alpha, beta, false, visited));
            alpha = alpha.max(value);
            if alpha >= beta {
                trace!(skipped = children.len() - i - 1, "beta cutoff");
                break;
            }
        }
        value
    } else {
        let mut value = i64::MAX;
        for (i, child) in children.iter().enumerate() {
            value = value.min(alphabeta(child, alpha, beta, true, visited));
            beta = beta.min(value);
            if alpha >= beta {
                trace!(skipped = children.len() - i - 1, "alpha cutoff");
                break;
            }
        }
        value
    }
}

fn minimax(node: &GameNode, maximizing: bool) -> i64 {
    let children = match node {
        GameNode::Leaf { value } => return *value,
        GameNode::Internal { children, .. } => children,
    };

    let folded = children.iter().map(|child| minimax(child, !maximizing));
    if maximizing {
        folded.max().unwrap_or(i64::MIN)
    } else {
        folded.min().unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{evaluate, solve};
    use crate::minimax::tree::GameNode;

    fn spec_tree() -> GameNode {
        GameNode::max(vec![
            GameNode::min(vec![GameNode::leaf(3), GameNode::leaf(5)]),
            GameNode::min(vec![GameNode::leaf(2), GameNode::leaf(9)]),
        ])
    }

    #[test]
    fn max_of_mins_backs_up_three() {
        let tree = spec_tree();
        let outcome = solve(&tree);
        assert_eq!(outcome.root_value, 3);
        assert_eq!(evaluate(&tree), 3);
        assert!(outcome.visited_leaves <= tree.leaf_count());
    }

    #[test]
    fn cutoff_skips_leaves_and_counts_only_visited_ones() {
        // After the first MIN child settles at 3 (alpha = 3), the second MIN
        // child hits 2 on its first leaf and fails low: its 9 is never
        // visited.
        let outcome = solve(&spec_tree());
        assert_eq!(outcome.visited_leaves, 3);
    }

    #[test]
    fn min_root_minimizes() {
        let tree = GameNode::min(vec![
            GameNode::max(vec![GameNode::leaf(4), GameNode::leaf(6)]),
            GameNode::max(vec![GameNode::leaf(7), GameNode::leaf(1)]),
        ]);
        let outcome = solve(&tree);
        assert_eq!(outcome.root_value, 6);
        assert_eq!(evaluate(&tree), 6);
    }

    #[test]
    fn bare_leaf_root_visits_itself() {
        let outcome = solve(&GameNode::leaf(-11));
        assert_eq!(outcome.root_value, -11);
        assert_eq!(outcome.visited_leaves, 1);
    }

    #[test]
    fn unary_chain_never_prunes() {
        // With a single child per level, alpha >= beta can never trigger, so
        // every leaf is visited.
        let tree = GameNode::max(vec![GameNode::min(vec![GameNode::max(vec![
            GameNode::leaf(8),
        ])])]);
        let outcome = solve(&tree);
        assert_eq!(outcome.root_value, 8);
        assert_eq!(outcome.visited_leaves, tree.leaf_count());
    }

    #[test]
    fn ascending_leaves_under_max_of_mins_prune_nothing_on_the_left() {
        // Worst-case order for pruning: the best child comes last.
        let tree = GameNode::max(vec![
            GameNode::min(vec![GameNode::leaf(1), GameNode::leaf(2)]),
            GameNode::min(vec![GameNode::leaf(3), GameNode::leaf(4)]),
        ]);
        let outcome = solve(&tree);
        assert_eq!(outcome.root_value, 3);
        // First child visits both leaves (min = 1). Second child: leaf 3
        // keeps beta = 3 > alpha = 1, so leaf 4 is still visited.
        assert_eq!(outcome.visited_leaves, 4);
    }

    #[test]
    fn negative_values_are_handled() {
        let tree = GameNode::min(vec![
            GameNode::max(vec![GameNode::leaf(-3), GameNode::leaf(-7)]),
            GameNode::max(vec![GameNode::leaf(-2)]),
        ]);
        let outcome = solve(&tree);
        assert_eq!(outcome.root_value, -3);
        assert_eq!(evaluate(&tree), -3);
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::{evaluate, solve};
        use crate::minimax::tree::GameNode;

        fn arb_tree() -> impl Strategy<Value = GameNode> {
            let leaf = (-50i64..50).prop_map(GameNode::leaf);
            leaf.prop_recursive(4, 32, 4, |inner| {
                (
                    proptest::bool::ANY,
                    proptest::collection::vec(inner, 1..4),
                )
                    .prop_map(|(max, children)| {
                        if max {
                            GameNode::max(children)
                        } else {
                            GameNode::min(children)
                        }
                    })
            })
        }

        proptest! {
            #[test]
            fn pruning_never_changes_the_root_value(tree in arb_tree()) {
                let outcome = solve(&tree);
                prop_assert_eq!(outcome.root_value, evaluate(&tree));
            }

            #[test]
            fn visited_leaves_never_exceed_the_total(tree in arb_tree()) {
                let outcome = solve(&tree);
                prop_assert!(outcome.visited_leaves >= 1);
                prop_assert!(outcome.visited_leaves <= tree.leaf_count());
            }
        }
    }
}
