mod tree;

use quickcheck::{Arbitrary, Gen};
use unbalanced_bst::{Direction, Value};

/// A path to probe the tree with. Kept short so that some probes land on nodes.
#[derive(Clone, Debug)]
pub struct Probe(pub Vec<Direction>);

impl Arbitrary for Probe {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 6;
        Probe(
            (0..len)
                .map(|_| *g.choose(&[Direction::Left, Direction::Right]).unwrap())
                .collect(),
        )
    }
}

/// A [`Value`] that is an integer most of the time and text occasionally.
#[derive(Clone, Debug)]
pub struct Mixed(pub Value);

impl Arbitrary for Mixed {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1]).unwrap() {
            0 => Mixed(Value::Int(i8::arbitrary(g).into())),
            _ => Mixed(Value::Text(String::arbitrary(g))),
        }
    }
}
