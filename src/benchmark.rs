use balanced_search_tree::{Tree, TraverseMode, TreeOps};
use clap::Parser;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::str::FromStr;
use std::time::Instant;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    Ascending,
    Descending,
    Shuffled,
}

#[derive(Debug, Error)]
#[error("unknown order `{0}` (expected ascending, descending or shuffled)")]
struct ParseOrderError(String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(Order::Ascending),
            "descending" | "desc" => Ok(Order::Descending),
            "shuffled" | "random" => Ok(Order::Shuffled),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    /// Order in which keys are inserted and removed
    #[arg(long, default_value = "ascending")]
    order: Order,

    /// Seed for the shuffled order
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Print the tree after inserting, in the given traversal mode
    #[arg(long)]
    dump: Option<TraverseMode>,
}

fn keys(args: &Args) -> Vec<usize> {
    let mut keys: Vec<usize> = (0..args.size).collect();
    match args.order {
        Order::Ascending => {}
        Order::Descending => keys.reverse(),
        Order::Shuffled => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            keys.shuffle(&mut rng);
        }
    }
    keys
}

fn run(tree: &mut Tree<usize>, keys: &[usize]) -> [Instant; 4] {
    let start = Instant::now();
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tree.len(), i);
        tree.add(*key);
        assert!(tree.contains(key));
    }
    let inserted = Instant::now();
    for key in keys {
        assert_eq!(tree.search(key), Some(key));
    }
    let checked_contains = Instant::now();
    for key in keys {
        assert!(tree.remove(key));
    }
    let end = Instant::now();
    [start, inserted, checked_contains, end]
}

fn main() {
    let args = Args::parse();
    let keys = keys(&args);

    println!(
        "Running with {:?} order and {} node count",
        args.order, args.size
    );

    if let Some(mode) = args.dump {
        let tree: Tree<usize> = keys.iter().copied().collect();
        print!("{}", tree.dump(mode));
        println!("Height {} for {} nodes", tree.height(), tree.len());
    }

    let mut tree: Tree<usize> = Tree::new();
    let [start, inserted, checked_contains, end] = run(&mut tree, &keys);
    assert!(tree.is_empty());

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "Removals took {} seconds",
        end.saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
