use arbitrary::Arbitrary;
use dsu::{reference::QuickFind, Parent, UnionFind};

/// A single operation against a disjoint set, with indices that may fall
/// outside the universe
#[derive(Debug, Clone, Copy, Arbitrary)]
pub enum Op {
    Find(i16),
    SizeOf(i16),
    Connected(i16, i16),
    Union(i16, i16),
    Parent(i16),
}

fn in_range(len: usize, key: i16) -> Option<usize> {
    usize::try_from(key).ok().filter(|&k| k < len)
}

/// Replay `ops` against both [`UnionFind`] and the naive reference,
/// asserting that every result agrees
pub fn run_differential(len: usize, ops: &[Op]) {
    let mut uf = UnionFind::new(len);
    let mut reference = QuickFind::new(len);

    for &op in ops {
        match op {
            Op::Find(k) => match in_range(len, k) {
                Some(i) => assert_eq!(uf.find(k).ok(), reference.find(i).ok()),
                None => assert!(uf.find(k).is_err()),
            },
            Op::SizeOf(k) => match in_range(len, k) {
                Some(i) => assert_eq!(uf.size_of(k).ok(), reference.size_of(i).ok()),
                None => assert!(uf.size_of(k).is_err()),
            },
            Op::Connected(a, b) => match (in_range(len, a), in_range(len, b)) {
                (Some(i), Some(j)) => {
                    assert_eq!(uf.connected(a, b).ok(), reference.connected(i, j).ok());
                },
                _ => assert!(uf.connected(a, b).is_err()),
            },
            Op::Union(a, b) => match (in_range(len, a), in_range(len, b)) {
                (Some(i), Some(j)) => {
                    assert_eq!(uf.union(a, b).ok(), reference.union(i, j).ok());
                },
                _ => assert!(uf.union(a, b).is_err()),
            },
            Op::Parent(k) => match in_range(len, k) {
                Some(i) => {
                    let root = reference.find(i).unwrap();
                    match uf.parent(k).unwrap() {
                        Parent::Root { size } => {
                            assert_eq!(root, i);
                            assert_eq!(size, reference.size_of(i).unwrap());
                        },
                        Parent::Child(p) => {
                            assert_ne!(p, i);
                            assert!(reference.connected(i, p).unwrap());
                        },
                    }
                },
                None => assert!(uf.parent(k).is_err()),
            },
        }
    }

    for i in 0..len {
        assert_eq!(uf.find(i).ok(), reference.find(i).ok());
    }
    assert_eq!(
        uf.roots().collect::<Vec<_>>(),
        (0..len)
            .filter(|&i| reference.find(i).ok() == Some(i))
            .collect::<Vec<_>>(),
    );
}
