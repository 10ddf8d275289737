//! Two-player adversarial game-tree solving: Minimax with alpha-beta pruning
//! and visited-leaf accounting.

pub mod solver;
pub mod tree;

pub use solver::{evaluate, solve, MinimaxOutcome};
pub use tree::{GameNode, NodeKind};
