//! Array-backed storage for the disjoint-set forest

use std::{fmt, iter, mem, slice};

use crate::disjoint_set::{forest_find, ForestFind, NoNode, SizedUnion};

/// Parallel parent-link and subtree-size arrays over the keys `0..len`
///
/// Sizes are only kept current at roots.
#[derive(Default, Clone)]
pub(crate) struct VecForest {
    parents: Vec<usize>,
    sizes: Vec<usize>,
}

impl fmt::Debug for VecForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { parents, sizes: _ } = self;
        let mut f = f.debug_map();

        for (key, &parent) in parents.iter().enumerate() {
            let mut root = parent;
            loop {
                let gpar = *parents.get(root).unwrap_or_else(|| unreachable!());
                if gpar == root {
                    break;
                }

                root = gpar;
            }

            f.entry(&key, &(root != key).then_some(root));
        }

        f.finish()
    }
}

impl VecForest {
    /// Construct a forest of `len` singleton trees
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            sizes: vec![1; len],
        }
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.parents.len() }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    #[inline]
    pub fn roots(&self) -> Roots<'_> { Roots(self.parents.iter().enumerate()) }
}

impl ForestFind<usize> for VecForest {
    #[inline]
    fn load_parent(&self, key: usize) -> Option<usize> { self.parents.get(key).copied() }

    #[inline]
    fn store_parent(&mut self, key: usize, parent: usize) -> Option<usize> {
        Some(mem::replace(self.parents.get_mut(key)?, parent))
    }
}

impl SizedUnion<usize> for VecForest {
    type Size = usize;

    #[inline]
    fn find(&mut self, key: usize) -> Result<usize, NoNode<usize>> { forest_find(self, key) }

    #[inline]
    fn size(&self, root: usize) -> Option<usize> { self.sizes.get(root).copied() }

    fn merge(&mut self, root: usize, merged: usize) {
        debug_assert!(self.parents.get(root) == Some(&root));
        debug_assert!(self.parents.get(merged) == Some(&merged));

        let merged_size = *self.sizes.get(merged).unwrap_or_else(|| unreachable!());
        let size = self.sizes.get_mut(root).unwrap_or_else(|| unreachable!());
        *size = size
            .checked_add(merged_size)
            .unwrap_or_else(|| unreachable!());
        *self.parents.get_mut(merged).unwrap_or_else(|| unreachable!()) = root;
    }
}

/// Iterator over the roots of a [`UnionFind`](crate::UnionFind) in ascending
/// key order
#[derive(Debug, Clone)]
#[must_use]
#[repr(transparent)]
pub struct Roots<'a>(iter::Enumerate<slice::Iter<'a, usize>>);

impl Iterator for Roots<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            let (key, &parent) = self.0.next()?;

            if parent == key {
                break Some(key);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.0.size_hint().1) }
}
