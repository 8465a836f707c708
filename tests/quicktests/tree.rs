use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;
use unbalanced_bst::{Direction, Error, Key, NodeRef, Tree, Value};

use crate::{Mixed, Probe};

/// Collects every node by walking child links from the root.
fn all_nodes<K>(tree: &Tree<K>) -> Vec<NodeRef<'_, K>> {
    let mut nodes = Vec::new();
    let mut stack: Vec<_> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.left());
        stack.extend(node.right());
        nodes.push(node);
    }
    nodes
}

/// Checks that every node sits strictly between the bounds its ancestors impose.
fn is_ordered<K: Ord>(node: NodeRef<'_, K>, low: Option<&K>, high: Option<&K>) -> bool {
    let value = node.value();
    low.map_or(true, |l| l < value)
        && high.map_or(true, |h| value < h)
        && node.left().map_or(true, |l| is_ordered(l, low, Some(value)))
        && node.right().map_or(true, |r| is_ordered(r, Some(value), high))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs).unwrap();
    let values: Vec<_> = tree.iter().collect();

    values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn bst_invariant(xs: Vec<i16>) -> bool {
    let tree = Tree::from_values(xs).unwrap();
    tree.root().map_or(true, |root| is_ordered(root, None, None))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied()).unwrap();

    xs.iter().all(|x| tree.find_value(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied()).unwrap();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(x))
        .all(|x| tree.get(x).is_none() && tree.find_value(x) == tree.root())
}

#[quickcheck]
fn duplicates_keep_the_shape(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.iter().copied()).unwrap();
    let before = tree.render();
    let len = tree.len();

    for x in &xs {
        tree.insert(*x).unwrap();
    }

    tree.len() == len && tree.render() == before
}

#[quickcheck]
fn paths_lead_to_their_nodes(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs).unwrap();

    all_nodes(&tree).into_iter().all(|node| {
        tree.find_path(node.path()) == Some(node) && tree.get_path(node.path()) == Some(node)
    })
}

#[quickcheck]
fn depth_and_displacement(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs).unwrap();

    all_nodes(&tree).into_iter().all(|node| {
        let path = node.path();
        let rights = path.iter().filter(|&&d| d == Direction::Right).count() as isize;
        let lefts = path.iter().filter(|&&d| d == Direction::Left).count() as isize;

        node.depth() == path.len() && node.displacement() == (rights - lefts).unsigned_abs()
    })
}

#[quickcheck]
fn parents_are_one_turn_up(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs).unwrap();

    all_nodes(&tree).into_iter().all(|node| match node.parent() {
        None => node.is_root() && node.path().is_empty(),
        Some(parent) => {
            let (last, rest) = node.path().split_last().unwrap();
            &parent.path()[..] == rest && parent.child(*last) == Some(node)
        }
    })
}

#[quickcheck]
fn misplaced_paths_fall_back_to_root(xs: Vec<i8>, probe: Probe) -> bool {
    let tree = Tree::from_values(xs).unwrap();

    match tree.get_path(&probe.0) {
        Some(node) => {
            node.path()[..] == probe.0[..] && tree.find_path(&probe.0) == Some(node)
        }
        None => tree.find_path(&probe.0) == tree.root(),
    }
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied()).unwrap();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => {
            tree.min_node().unwrap().value() == min && tree.max_node().unwrap().value() == max
        }
        _ => tree.min_node() == Err(Error::EmptyTree) && tree.max_node() == Err(Error::EmptyTree),
    }
}

#[quickcheck]
fn kind_guard_leaves_tree_unchanged(values: Vec<Mixed>) -> bool {
    let mut tree = Tree::new();
    let mut kind = None;

    for Mixed(value) in values {
        let before = tree.len();
        let value_kind = value.kind();
        match tree.insert(value) {
            Ok(()) => {
                let expected = *kind.get_or_insert(value_kind);
                if expected != value_kind {
                    return false;
                }
            }
            Err(Error::TypeMismatch { expected, found }) => {
                if kind != Some(expected) || found != value_kind || tree.len() != before {
                    return false;
                }
            }
            Err(_) => return false,
        }
    }

    tree.iter().all(|v: &Value| Some(v.kind()) == kind)
}

#[quickcheck]
fn rendering_is_rectangular(xs: Vec<i16>) -> bool {
    let tree = Tree::from_values(xs).unwrap();
    let lines = tree.render();

    match lines.first() {
        None => tree.is_empty(),
        Some(first) => {
            let width = first.chars().count();
            lines.iter().all(|l| l.chars().count() == width)
        }
    }
}
