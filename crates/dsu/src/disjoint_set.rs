//! Storage-agnostic find and union algorithms over a parent-link forest

use std::cmp::Ordering;

/// Error indicating a key passed to a forest operation does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No disjoint-set node found with ID {0}")]
pub struct NoNode<T>(
    /// The missing key
    pub T,
);

/// The outcome of a union of two partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unioned<K> {
    /// The root of the combined partition
    pub root: K,
    /// The root absorbed into `root`, or `None` if both keys already shared a
    /// partition
    pub unioned: Option<K>,
}

impl<K> Unioned<K> {
    /// Returns true if two distinct partitions were combined
    #[inline]
    #[must_use]
    pub fn did_merge(self) -> bool { self.unioned.is_some() }
}

/// Read and write access to the parent links of a forest
pub(crate) trait ForestFind<K> {
    /// Read the parent link of `key`, or `None` if `key` is not present
    fn load_parent(&self, key: K) -> Option<K>;

    /// Overwrite the parent link of `key`, returning the previous link
    fn store_parent(&mut self, key: K, parent: K) -> Option<K>;
}

/// Locate the root of the tree containing `key`, relinking every node on the
/// walked path directly to that root
///
/// # Errors
/// Returns an error if `key` is not present in the forest.  No links are
/// modified in that case.
pub(crate) fn forest_find<K: Copy + Eq, F: ForestFind<K>>(set: &mut F, key: K) -> Result<K, NoNode<K>> {
    let mut root = key;
    let mut parent = set.load_parent(root).ok_or(NoNode(key))?;

    while parent != root {
        root = parent;
        parent = set.load_parent(root).unwrap_or_else(|| unreachable!());
    }

    let mut node = key;
    while node != root {
        node = set
            .store_parent(node, root)
            .unwrap_or_else(|| unreachable!());
    }

    Ok(root)
}

/// Root-level operations needed to union trees by size
pub(crate) trait SizedUnion<K> {
    type Size: Ord;

    fn find(&mut self, key: K) -> Result<K, NoNode<K>>;

    fn size(&self, root: K) -> Option<Self::Size>;

    /// Attach `merged` beneath `root`, folding its size into `root`'s
    fn merge(&mut self, root: K, merged: K);
}

/// Union the partitions containing `a` and `b`, attaching the smaller tree
/// beneath the larger one
///
/// When both trees are the same size the root of `a` is attached beneath the
/// root of `b`.
///
/// # Errors
/// Returns an error if either key is not present in the forest.  If only `b`
/// is missing, the path from `a` may already have been compressed.
pub(crate) fn sized_union<K: Copy + Eq, S: SizedUnion<K>>(
    set: &mut S,
    a: K,
    b: K,
) -> Result<Unioned<K>, NoNode<K>> {
    let a = set.find(a)?;
    let b = set.find(b)?;

    if a == b {
        return Ok(Unioned {
            root: a,
            unioned: None,
        });
    }

    let a_size = set.size(a).unwrap_or_else(|| unreachable!());
    let b_size = set.size(b).unwrap_or_else(|| unreachable!());

    let (root, merged) = match a_size.cmp(&b_size) {
        Ordering::Greater => (a, b),
        Ordering::Less | Ordering::Equal => (b, a),
    };

    set.merge(root, merged);

    Ok(Unioned {
        root,
        unioned: Some(merged),
    })
}
