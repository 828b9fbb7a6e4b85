use std::collections::BTreeMap;

use balanced_search_tree::{Tree, TraverseMode, TreeOps};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

#[derive(Debug, PartialEq, Clone, Copy)]
enum Operation {
    Add(u8),
    Remove(u8),
}

impl Arbitrary for Operation {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Operation::Add(u8::arbitrary(g))
        } else {
            Operation::Remove(u8::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            Operation::Add(x) => Box::new(x.shrink().map(Operation::Add)),
            Operation::Remove(x) => Box::new(x.shrink().map(Operation::Remove)),
        }
    }
}

/// Multiset of items, the reference the tree is compared against.
#[derive(Default)]
struct Model(BTreeMap<u8, usize>);

impl Model {
    fn add(&mut self, item: u8) {
        *self.0.entry(item).or_default() += 1;
    }

    fn remove(&mut self, item: u8) -> bool {
        match self.0.get_mut(&item) {
            None => false,
            Some(1) => {
                self.0.remove(&item);
                true
            }
            Some(count) => {
                *count -= 1;
                true
            }
        }
    }

    fn items(&self) -> Vec<u8> {
        self.0
            .iter()
            .flat_map(|(&item, &count)| std::iter::repeat_n(item, count))
            .collect()
    }
}

fn within_height_bound<T>(tree: &Tree<T>) -> bool {
    tree.height() as f64 <= 1.5 * ((tree.len() + 1) as f64).log2()
}

fn apply(ops: &[Operation]) -> (Tree<u8>, Model, bool) {
    let mut tree = Tree::new();
    let mut model = Model::default();
    let mut agreed = true;
    for op in ops {
        match *op {
            Operation::Add(item) => {
                tree.add(item);
                model.add(item);
                agreed &= tree.contains(&item);
            }
            Operation::Remove(item) => {
                agreed &= tree.remove(&item) == model.remove(item);
            }
        }
        agreed &= within_height_bound(&tree);
    }
    (tree, model, agreed)
}

#[quickcheck]
fn in_order_is_sorted(items: Vec<i32>) -> bool {
    let tree: Tree<i32> = items.iter().copied().collect();
    let mut sorted = items;
    sorted.sort();
    tree.iter().copied().eq(sorted.iter().copied())
        && tree.traverse(TraverseMode::InOrder).into_iter().eq(sorted.iter())
        && tree
            .traverse(TraverseMode::ReverseInOrder)
            .into_iter()
            .eq(sorted.iter().rev())
}

#[quickcheck]
fn height_stays_logarithmic(items: Vec<u16>) -> bool {
    let mut tree = Tree::new();
    items.into_iter().all(|item| {
        tree.add(item);
        within_height_bound(&tree)
    })
}

#[quickcheck]
fn mutations_match_multiset(ops: Vec<Operation>) -> bool {
    let (tree, model, agreed) = apply(&ops);
    agreed && tree.len() == model.items().len() && tree.into_iter().eq(model.items())
}

#[quickcheck]
fn count_matches_reachable_items(ops: Vec<Operation>) -> bool {
    let (tree, _, _) = apply(&ops);
    [
        TraverseMode::PreOrder,
        TraverseMode::PostOrder,
        TraverseMode::InOrder,
        TraverseMode::ReverseInOrder,
    ]
    .into_iter()
    .all(|mode| tree.traverse(mode).len() == tree.len())
        && tree.iter().len() == tree.len()
}

#[quickcheck]
fn added_items_stay_until_removed(items: Vec<u8>, removed: u8) -> bool {
    let mut tree: Tree<u8> = items.iter().copied().collect();
    let present = items.iter().all(|item| tree.contains(item));

    while tree.remove(&removed) {}
    let others_present = items
        .iter()
        .filter(|&&item| item != removed)
        .all(|item| tree.contains(item));

    present && others_present && !tree.contains(&removed)
}

#[quickcheck]
fn removing_absent_item_changes_nothing(items: Vec<u8>, probe: u8) -> bool {
    let mut tree: Tree<u8> = items.into_iter().filter(|&item| item != probe).collect();
    let len = tree.len();
    let before = tree.dump(TraverseMode::PreOrder).to_string();

    !tree.remove(&probe)
        && tree.len() == len
        && tree.dump(TraverseMode::PreOrder).to_string() == before
}

#[quickcheck]
fn clear_forgets_everything(items: Vec<u8>) -> bool {
    let mut tree: Tree<u8> = items.iter().copied().collect();
    tree.clear();
    tree.is_empty() && tree.height() == 0 && items.iter().all(|item| !tree.contains(item))
}
