//! Folds a small file tree a few times and prints each state.
//!
//! Run with `cargo run -p treefold --example explorer`. Set `TREEFOLD_LOG`
//! to `debug` or `trace` to see what the operations log.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use treefold::prelude::*;

fn file_tree() -> Tree {
    Tree::new(TreeNode::branch(
        "~/project",
        "project",
        [
            TreeNode::branch(
                "src",
                "src",
                [
                    TreeNode::leaf("main.rs", "main.rs"),
                    TreeNode::branch(
                        "ops",
                        "ops",
                        [
                            TreeNode::leaf("fold.rs", "fold.rs"),
                            TreeNode::leaf("flatten.rs", "flatten.rs"),
                        ],
                    ),
                ],
            ),
            TreeNode::branch("tests", "tests", [TreeNode::leaf("ops.rs", "ops.rs")]),
            TreeNode::leaf("Cargo.toml", "Cargo.toml"),
        ],
    ))
}

fn print(title: &str, renderer: &Renderer, tree: &Tree) {
    println!("{title}");
    for line in renderer.render_tree(tree) {
        println!("  {line}");
    }
    println!();
}

fn main() -> Result<(), TreeError> {
    let level = match std::env::var("TREEFOLD_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("Failed to initialize logger");

    let renderer = Renderer::new();
    let tree = file_tree();
    print("expanded:", &renderer, &tree);

    let tree = collapse_node(&tree, &["src", "ops"]);
    print("src/ops collapsed:", &renderer, &tree);

    let tree = tree.toggle(&["tests"]).collapse(&["missing", "path"]);
    print("tests toggled:", &renderer, &tree);

    let fancy = Renderer::with_options(
        RenderOptions::default()
            .indent("  ")
            .root_symbol("# ")
            .leaf_symbol("  ")
            .branch_symbol(Symbol::dynamic(|item: &TreeBranchItem| {
                if item.collapsed {
                    "▸ ".to_string()
                } else {
                    "▾ ".to_string()
                }
            }))
            .max_width(24),
    );
    print("custom symbols:", &fancy, &expand_all(&tree));

    let json = serde_json::to_string_pretty(&collapse_all(&tree).to_value()?)?;
    println!("collapsed, as json:\n{json}");

    let restored = Tree::from_value(serde_json::from_str(&json)?)?;
    println!("\nrestored rows: {}", visible_items(&restored).len());
    Ok(())
}
