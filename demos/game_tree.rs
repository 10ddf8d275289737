//! Evaluates a game tree with alpha-beta pruning and reports the two graded
//! quantities: the root value and the number of leaves actually visited.
//!
//! Pass `--tree tree.json` to load a tree in the generator's JSON shape.

use clap::Parser;
use didact::minimax::{evaluate, solve, GameNode};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a MAX/MIN game tree with alpha-beta pruning")]
struct Args {
    /// Path to a game-tree JSON file.
    #[arg(long)]
    tree: Option<std::path::PathBuf>,
}

fn built_in_tree() -> GameNode {
    GameNode::max(vec![
        GameNode::min(vec![GameNode::leaf(3), GameNode::leaf(5)]),
        GameNode::min(vec![GameNode::leaf(2), GameNode::leaf(9)]),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let tree = match &args.tree {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => built_in_tree(),
    };

    let outcome = solve(&tree);
    println!("Root value:       {}", outcome.root_value);
    println!(
        "Visited leaves:   {} of {}",
        outcome.visited_leaves,
        tree.leaf_count()
    );
    println!("Exhaustive value: {}", evaluate(&tree));

    Ok(())
}
