//! The bounds-checked public disjoint-set type

use std::fmt;

use crate::{
    disjoint_set::{self, ForestFind, SizedUnion, Unioned},
    vec_forest::{Roots, VecForest},
};

/// Error indicating an element index passed to a [`UnionFind`] operation lies
/// outside the universe of the structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Disjoint-set element {key} out of range for {len} elements")]
pub struct OutOfRange<K> {
    /// The rejected index
    pub key: K,
    /// The number of elements in the structure
    pub len: usize,
}

/// The immediate parent link of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    /// The element is the root of a tree holding `size` elements
    Root {
        /// The number of elements in the tree
        size: usize,
    },
    /// The element is linked beneath another element, which may not itself be
    /// a root
    Child(usize),
}

impl Parent {
    /// Encode this link as a single integer, using the negated tree size for
    /// roots and the parent index otherwise
    #[must_use]
    pub fn to_signed(self) -> isize {
        // Vec lengths never exceed isize::MAX
        match self {
            Self::Root { size } => -isize::try_from(size).unwrap_or_else(|_| unreachable!()),
            Self::Child(parent) => isize::try_from(parent).unwrap_or_else(|_| unreachable!()),
        }
    }
}

/// A disjoint-set forest over the fixed universe `0..len`, merging by size and
/// compressing paths on every lookup
///
/// Element indices may be given as any primitive integer type.  Negative
/// indices and indices not less than [`len`](Self::len) are rejected with
/// [`OutOfRange`] before the structure is touched.
#[derive(Default, Clone)]
pub struct UnionFind(VecForest);

impl fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(forest) = self;
        fmt::Debug::fmt(forest, f)
    }
}

impl UnionFind {
    /// Construct a union-find of `len` singleton sets
    #[must_use]
    pub fn new(len: usize) -> Self {
        tracing::trace!(len, "Allocating disjoint-set forest");
        Self(VecForest::new(len))
    }

    /// Gets the number of elements in the union-find
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns true if the union-find has no elements
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterate over the current set representatives in ascending order
    #[inline]
    pub fn roots(&self) -> Roots<'_> { self.0.roots() }

    /// Count the disjoint sets currently held
    #[must_use]
    pub fn set_count(&self) -> usize { self.roots().count() }

    fn index<K: Copy + TryInto<usize>>(&self, key: K) -> Result<usize, OutOfRange<K>> {
        let len = self.len();

        key.try_into().ok().filter(|&i| i < len).ok_or_else(|| {
            tracing::trace!(len, "Rejected out-of-range disjoint-set element");
            OutOfRange { key, len }
        })
    }

    #[inline]
    fn find_index(&mut self, index: usize) -> usize {
        disjoint_set::forest_find(&mut self.0, index).unwrap_or_else(|_| unreachable!())
    }

    /// Find the root of the set containing the given element, and relink every
    /// element between it and its root directly to the root
    ///
    /// # Errors
    /// Returns an error if the element is out of range.
    pub fn find<K: Copy + TryInto<usize>>(&mut self, key: K) -> Result<usize, OutOfRange<K>> {
        let index = self.index(key)?;
        Ok(self.find_index(index))
    }

    /// Gets the number of elements in the set containing the given element
    ///
    /// # Errors
    /// Returns an error if the element is out of range.
    pub fn size_of<K: Copy + TryInto<usize>>(&mut self, key: K) -> Result<usize, OutOfRange<K>> {
        let index = self.index(key)?;
        let root = self.find_index(index);
        Ok(self.0.size(root).unwrap_or_else(|| unreachable!()))
    }

    /// Returns true if both elements belong to the same set
    ///
    /// # Errors
    /// Returns an error if either element is out of range.  Both are checked
    /// before any path is compressed.
    pub fn connected<K: Copy + TryInto<usize>>(
        &mut self,
        a: K,
        b: K,
    ) -> Result<bool, OutOfRange<K>> {
        let a = self.index(a)?;
        let b = self.index(b)?;
        Ok(self.find_index(a) == self.find_index(b))
    }

    /// Merge the sets containing the two given elements
    ///
    /// The root of the smaller set is attached beneath the root of the larger.
    /// If both sets are the same size, the root of `b`'s set survives.  Merging
    /// two elements which already share a set leaves the structure unchanged.
    ///
    /// # Errors
    /// Returns an error if either element is out of range.  Both are checked
    /// before any path is compressed.
    pub fn union<K: Copy + TryInto<usize>>(
        &mut self,
        a: K,
        b: K,
    ) -> Result<Unioned<usize>, OutOfRange<K>> {
        let a = self.index(a)?;
        let b = self.index(b)?;
        let unioned =
            disjoint_set::sized_union(&mut self.0, a, b).unwrap_or_else(|_| unreachable!());

        if let Unioned {
            root,
            unioned: Some(merged),
        } = unioned
        {
            tracing::trace!(root, merged, "Merged disjoint sets");
        }

        Ok(unioned)
    }

    /// Inspect the immediate parent link of the given element without
    /// compressing any paths
    ///
    /// # Errors
    /// Returns an error if the element is out of range.
    pub fn parent<K: Copy + TryInto<usize>>(&self, key: K) -> Result<Parent, OutOfRange<K>> {
        let index = self.index(key)?;
        let parent = self.0.load_parent(index).unwrap_or_else(|| unreachable!());

        Ok(if parent == index {
            Parent::Root {
                size: self.0.size(index).unwrap_or_else(|| unreachable!()),
            }
        } else {
            Parent::Child(parent)
        })
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::{OutOfRange, Parent, UnionFind};
    use crate::{reference::QuickFind, strategy::len_and_merges};

    #[test]
    fn starts_as_singletons() {
        let mut uf = UnionFind::new(8);

        assert_eq!(uf.len(), 8);
        assert_eq!(uf.set_count(), 8);
        for i in 0..8_usize {
            assert_eq!(uf.find(i), Ok(i));
            assert_eq!(uf.size_of(i), Ok(1));
            assert_eq!(uf.parent(i), Ok(Parent::Root { size: 1 }));
        }
    }

    #[test]
    fn empty() {
        let mut uf = UnionFind::new(0);

        assert!(uf.is_empty());
        assert_eq!(uf.roots().count(), 0);
        assert_eq!(uf.find(0), Err(OutOfRange { key: 0, len: 0 }));
        assert_eq!(UnionFind::default().len(), 0);
    }

    #[test]
    fn scenario() {
        let mut uf = UnionFind::new(5);

        uf.union(0, 1).unwrap();
        assert_eq!(uf.connected(0, 1), Ok(true));
        assert_eq!(uf.size_of(0), Ok(2));

        uf.union(2, 3).unwrap();
        assert_eq!(uf.size_of(2), Ok(2));

        uf.union(1, 2).unwrap();
        assert_eq!(uf.size_of(0), Ok(4));
        assert_eq!(uf.size_of(3), Ok(4));
        assert_eq!(uf.find(0), uf.find(3));
        assert_eq!(uf.connected(0, 3), Ok(true));
        assert_eq!(uf.connected(0, 4), Ok(false));
        assert_eq!(uf.set_count(), 2);

        uf.union(4, 0).unwrap();
        assert_eq!(uf.size_of(4), Ok(5));
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(uf.connected(i, j), Ok(true));
            }
        }
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn tie_break_keeps_second_root() {
        let mut uf = UnionFind::new(2);

        let u = uf.union(0, 1).unwrap();
        assert_eq!((u.root, u.unioned), (1, Some(0)));

        assert_eq!(uf.find(0), Ok(1));
        assert_eq!(uf.parent(0), Ok(Parent::Child(1)));
        assert_eq!(uf.parent(1), Ok(Parent::Root { size: 2 }));
        assert_eq!(uf.parent(0).unwrap().to_signed(), 1);
        assert_eq!(uf.parent(1).unwrap().to_signed(), -2);
    }

    #[test]
    fn larger_set_survives() {
        let mut uf = UnionFind::new(4);

        uf.union(0, 1).unwrap();
        let u = uf.union(1, 2).unwrap();
        assert_eq!((u.root, u.unioned), (1, Some(2)));

        let u = uf.union(3, 0).unwrap();
        assert_eq!((u.root, u.unioned), (1, Some(3)));
        assert_eq!(uf.parent(3), Ok(Parent::Child(1)));
        assert_eq!(uf.parent(1), Ok(Parent::Root { size: 4 }));
    }

    #[test]
    fn redundant_union_is_noop() {
        let mut uf = UnionFind::new(3);

        let u = uf.union(2, 2).unwrap();
        assert!(!u.did_merge());
        assert_eq!(u.root, 2);

        assert!(uf.union(0, 1).unwrap().did_merge());
        let before = format!("{uf:?}");
        let u = uf.union(0, 1).unwrap();
        assert!(!u.did_merge());
        assert_eq!(u.root, 1);
        assert_eq!(format!("{uf:?}"), before);
        assert_eq!(uf.parent(1), Ok(Parent::Root { size: 2 }));
    }

    #[test]
    fn parent_is_not_compressed() {
        let mut uf = UnionFind::new(4);

        uf.union(0, 1).unwrap();
        uf.union(2, 3).unwrap();
        uf.union(1, 3).unwrap();

        // 0 -> 1 -> 3 <- 2
        assert_eq!(uf.parent(0), Ok(Parent::Child(1)));
        assert_eq!(uf.parent(0), Ok(Parent::Child(1)));
        assert_eq!(uf.parent(1), Ok(Parent::Child(3)));

        assert_eq!(uf.find(0), Ok(3));
        assert_eq!(uf.parent(0), Ok(Parent::Child(3)));
        assert_eq!(uf.parent(3), Ok(Parent::Root { size: 4 }));
    }

    #[test]
    fn signed_indices() {
        let mut uf = UnionFind::new(3);

        uf.union(0_i32, 2_i32).unwrap();
        assert_eq!(uf.find(0_i64), Ok(2));
        assert_eq!(uf.size_of(2_i8), Ok(2));
        assert_eq!(uf.connected(0_u8, 2_u8), Ok(true));
    }

    #[test]
    fn rejects_out_of_range() {
        const N: i32 = 4;

        fn err<T>(key: i32) -> Result<T, OutOfRange<i32>> { Err(OutOfRange { key, len: 4 }) }

        let mut uf = UnionFind::new(4);
        uf.union(0, 1).unwrap();
        let before = format!("{uf:?}");

        assert_eq!(uf.find(-1), err(-1));
        assert_eq!(uf.find(N), err(N));
        assert_eq!(uf.size_of(-1), err(-1));
        assert_eq!(uf.size_of(N), err(N));
        assert_eq!(uf.connected(N, 0), err(N));
        assert_eq!(uf.connected(0, -1), err(-1));
        assert_eq!(uf.union(-1, 0), err(-1));
        assert_eq!(uf.union(0, N), err(N));
        assert_eq!(uf.parent(-1), err(-1));
        assert_eq!(uf.parent(N), err(N));
        assert_eq!(
            uf.find(usize::MAX),
            Err(OutOfRange {
                key: usize::MAX,
                len: 4
            })
        );

        assert_eq!(format!("{uf:?}"), before);
        assert_eq!(uf.parent(0), Ok(Parent::Child(1)));
    }

    #[test]
    fn error_message() {
        let mut uf = UnionFind::new(2);
        let err = uf.find(-3).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Disjoint-set element -3 out of range for 2 elements"
        );
    }

    fn check_sizes(uf: &mut UnionFind) {
        let len = uf.len();
        let mut counts = vec![0_usize; len];
        for i in 0..len {
            counts[uf.find(i).unwrap()] += 1;
        }

        let roots: Vec<_> = uf.roots().collect();
        let mut total = 0;
        for &root in &roots {
            assert_eq!(uf.size_of(root), Ok(counts[root]));
            total += counts[root];
        }
        assert_eq!(total, len);

        for (i, &count) in counts.iter().enumerate() {
            assert_eq!(count > 0, roots.contains(&i));
        }
    }

    fn run_diff(len: usize, merges: &[(usize, usize)]) {
        let mut uf = UnionFind::new(len);
        let mut reference = QuickFind::new(len);

        for &(a, b) in merges {
            let ours = uf.union(a, b).unwrap();
            let theirs = reference.union(a, b).unwrap();
            assert_eq!(ours, theirs);
        }

        for i in 0..len {
            assert_eq!(uf.find(i).ok(), reference.find(i).ok());
            assert_eq!(uf.size_of(i).ok(), reference.size_of(i).ok());
        }

        check_sizes(&mut uf);
    }

    proptest! {
        #[test]
        fn differential((len, merges) in len_and_merges(1..=512_usize, 0..=256)) {
            run_diff(len, &merges);
        }

        #[test]
        fn connected_is_an_equivalence((len, merges) in len_and_merges(1..=32_usize, 0..=48)) {
            let mut uf = UnionFind::new(len);
            for (a, b) in merges {
                uf.union(a, b).unwrap();
            }

            for a in 0..len {
                prop_assert_eq!(uf.connected(a, a), Ok(true));

                for b in 0..len {
                    let ab = uf.connected(a, b).unwrap();
                    prop_assert_eq!(ab, uf.connected(b, a).unwrap());

                    if ab {
                        for c in 0..len {
                            if uf.connected(b, c).unwrap() {
                                prop_assert!(uf.connected(a, c).unwrap());
                            }
                        }
                    }
                }
            }
        }

        #[test]
        fn repeated_union_is_idempotent((len, merges) in len_and_merges(1..=128_usize, 1..=64)) {
            let mut uf = UnionFind::new(len);
            for (a, b) in merges {
                uf.union(a, b).unwrap();
                let once = format!("{uf:?}");
                let sizes: Vec<_> = (0..len).map(|i| uf.size_of(i).unwrap()).collect();

                prop_assert!(!uf.union(a, b).unwrap().did_merge());
                prop_assert!(!uf.union(a, a).unwrap().did_merge());
                prop_assert_eq!(format!("{uf:?}"), once);
                prop_assert_eq!((0..len).map(|i| uf.size_of(i).unwrap()).collect::<Vec<_>>(), sizes);
            }
        }

        #[test]
        fn find_links_directly_to_root((len, merges) in len_and_merges(1..=256_usize, 0..=256)) {
            let mut uf = UnionFind::new(len);
            for (a, b) in merges {
                uf.union(a, b).unwrap();
            }

            for i in 0..len {
                let root = uf.find(i).unwrap();
                let expected = if root == i {
                    Parent::Root { size: uf.size_of(i).unwrap() }
                } else {
                    Parent::Child(root)
                };

                prop_assert_eq!(uf.parent(i), Ok(expected));
            }
        }
    }
}
