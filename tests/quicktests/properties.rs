use ordered_tree::OrderedTree;

use std::collections::{BTreeMap, HashSet};

fn build(xs: &[i8]) -> OrderedTree<i8, i8> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(*x, *x);
    }
    tree
}

fn keys(tree: &OrderedTree<i8, i8>) -> Vec<i8> {
    tree.in_order_traversal().map(|(k, _)| *k).collect()
}

fn strictly_ascending(keys: &[i8]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    strictly_ascending(&keys(&build(&xs)))
}

#[quickcheck]
fn insert_then_search(pairs: Vec<(i8, i8)>) -> bool {
    let mut tree = OrderedTree::new();
    pairs.iter().all(|(k, v)| {
        tree.insert(*k, *v);
        tree.search(k) == Some(v)
    })
}

#[quickcheck]
fn last_write_wins(pairs: Vec<(i8, i8)>) -> bool {
    let tree: OrderedTree<_, _> = pairs.iter().copied().collect();
    let model: BTreeMap<_, _> = pairs.iter().copied().collect();

    tree.len() == model.len() && tree.iter().eq(model.iter())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none() && tree.level(x).is_none() && tree.ancestor(x).is_empty())
}

#[quickcheck]
fn delete_absent_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = build(&xs);
    if tree.contains_key(&missing) {
        return true;
    }
    let before: Vec<_> = tree.pre_order_traversal().map(|(k, _)| *k).collect();

    !tree.delete(&missing) && tree.pre_order_traversal().map(|(k, _)| *k).eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut model: BTreeMap<_, _> = xs.iter().map(|x| (*x, *x)).collect();

    let reported = deletes
        .iter()
        .all(|x| tree.delete(x) == model.remove(x).is_some());

    reported
        && deletes.iter().all(|x| tree.search(x).is_none())
        && model.keys().all(|x| tree.search(x) == Some(x))
        && strictly_ascending(&keys(&tree))
}

#[quickcheck]
fn structural_queries_agree(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    xs.iter().all(|x| {
        let level = tree.level(x);
        let ancestors = tree.ancestor(x);
        level == Some(ancestors.len())
            && tree.degree(x) == level.map(|l| l + 1)
            && tree.height(x).is_some()
    })
}

#[quickcheck]
fn clear_always_empties(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    tree.clear();

    tree.is_empty() && xs.iter().all(|x| tree.search(x).is_none()) && tree.to_string().is_empty()
}

#[quickcheck]
fn rendering_has_one_line_per_node(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    tree.to_string().lines().count() == tree.len()
}

#[quickcheck]
fn level_order_visits_every_key_once(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut levels: Vec<_> = tree.level_order_traversal().map(|(k, _)| *k).collect();
    let root_first = levels.first() == tree.pre_order_traversal().next().map(|(k, _)| k);
    levels.sort_unstable();

    root_first && levels == keys(&tree)
}

#[quickcheck]
fn level_order_never_climbs(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let depths: Vec<_> = tree
        .level_order_traversal()
        .map(|(k, _)| tree.level(k))
        .collect();
    depths.windows(2).all(|pair| pair[0] <= pair[1])
}
