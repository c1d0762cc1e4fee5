use std::fmt::Display;

use clap::Parser;
use ordered_tree::cli::Cli;
use ordered_tree::OrderedTree;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    run(&cli);
}

fn run(cli: &Cli) {
    let mut tree = OrderedTree::new();

    println!("Inserting elements...");
    for pair in cli.pairs() {
        debug!(key = pair.key, "insert");
        tree.insert(pair.key, pair.value);
    }
    println!("Current tree:\n");
    println!("{}", tree);

    println!("Traversals:");
    println!("Pre-order: {}", join(tree.pre_order_traversal().map(|(k, _)| k)));
    println!("In-order: {}", join(tree.in_order_traversal().map(|(k, _)| k)));
    println!("Post-order: {}", join(tree.post_order_traversal().map(|(k, _)| k)));
    println!("Level-order: {}", join(tree.level_order_traversal().map(|(k, _)| k)));

    println!();
    for key in &cli.search {
        let found = tree.search(key).map_or("None", String::as_str);
        println!("Searching for key {}: {}", key, found);
    }

    println!("\nTree properties:");
    println!("Number of internal nodes: {}", tree.count_internal());
    println!("Degree of node {}: {}", cli.inspect, or_missing(tree.degree(&cli.inspect)));
    println!("Height of node {}: {}", cli.inspect, or_missing(tree.height(&cli.inspect)));
    println!("Level of node {}: {}", cli.locate, or_missing(tree.level(&cli.locate)));
    println!("Ancestors of node {}: {}", cli.locate, join(tree.ancestor(&cli.locate)));

    println!("\nDeleting node with key {}...", cli.delete);
    if !tree.delete(&cli.delete) {
        info!(key = cli.delete, "nothing to delete");
    }
    println!("In-order after deletion: {}", join(tree.iter().map(|(k, _)| k)));
    println!("\n{}", tree);

    println!("Clearing the tree...");
    tree.clear();
    println!("Is tree empty? {}", tree.is_empty());
    print!("{}", tree);
}

/// Space separated, the way the traversals read on one line.
fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Missing keys print as -1.
fn or_missing(answer: Option<usize>) -> String {
    answer.map_or_else(|| "-1".to_string(), |n| n.to_string())
}

fn setup_logging(verbosity: u8) {
    let filter = verbosity_filter(verbosity);
    let rust_log = std::env::var("RUST_LOG").ok();

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter(rust_log.as_deref(), filter)))
        .init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}

/// `RUST_LOG` directives win when they parse; otherwise the `-d` count picks a global level.
fn env_filter(rust_log: Option<&str>, fallback: LevelFilter) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(fallback.into()))
}

fn verbosity_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    }
}
