//! A deliberately naive disjoint-set implementation for differential testing
//!
//! Every element stores the representative of its set directly, so lookups
//! are a single read and unions relabel the whole absorbed set.  The choice
//! of surviving representative follows the same size and tie-break rules as
//! [`UnionFind`](crate::UnionFind), so the two can be compared root-for-root.

use crate::disjoint_set::{NoNode, Unioned};

/// Eagerly-labelled disjoint sets with O(n) unions
#[derive(Debug, Clone, Default)]
pub struct QuickFind {
    labels: Vec<usize>,
    counts: Vec<usize>,
}

impl QuickFind {
    /// Construct `len` singleton sets
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
            counts: vec![1; len],
        }
    }

    /// Gets the number of elements
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.labels.len() }

    /// Returns true if there are no elements
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Gets the representative of the set containing `key`
    ///
    /// # Errors
    /// Returns an error if `key` is out of range.
    #[inline]
    pub fn find(&self, key: usize) -> Result<usize, NoNode<usize>> {
        self.labels.get(key).copied().ok_or(NoNode(key))
    }

    /// Gets the number of elements sharing a set with `key`
    ///
    /// # Errors
    /// Returns an error if `key` is out of range.
    pub fn size_of(&self, key: usize) -> Result<usize, NoNode<usize>> {
        let label = self.find(key)?;
        Ok(self.counts[label])
    }

    /// Returns true if `a` and `b` share a set
    ///
    /// # Errors
    /// Returns an error if either key is out of range.
    pub fn connected(&self, a: usize, b: usize) -> Result<bool, NoNode<usize>> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Merge the sets containing `a` and `b`, relabelling the smaller one
    ///
    /// # Errors
    /// Returns an error if either key is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> Result<Unioned<usize>, NoNode<usize>> {
        let a = self.find(a)?;
        let b = self.find(b)?;

        if a == b {
            return Ok(Unioned {
                root: a,
                unioned: None,
            });
        }

        let (root, merged) = if self.counts[a] > self.counts[b] {
            (a, b)
        } else {
            (b, a)
        };

        for label in &mut self.labels {
            if *label == merged {
                *label = root;
            }
        }
        self.counts[root] += self.counts[merged];

        Ok(Unioned {
            root,
            unioned: Some(merged),
        })
    }
}
